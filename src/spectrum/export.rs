use crate::data::model::StickSpectrum;
use crate::error::SpectrumError;

/// Header for the frequency column in exported tables.
pub const FREQUENCY_COLUMN: &str = "Frequency (cm^-1)";

/// Serialize the stick spectrum as comma-separated bytes: a header row with
/// the semantic column names, then one row per (frequency, intensity) pair.
///
/// Values are written with `f64`'s shortest round-trip formatting, so
/// re-parsing the table reproduces the original pairs exactly.
pub fn to_csv(spectrum: &StickSpectrum) -> Result<Vec<u8>, SpectrumError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([FREQUENCY_COLUMN, spectrum.kind.intensity_column().as_str()])?;
    for line in &spectrum.lines {
        writer.write_record([line.frequency.to_string(), line.intensity.to_string()])?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}
