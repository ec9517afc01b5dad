use std::fmt;

// ---------------------------------------------------------------------------
// SpectrumKind – which spectroscopy technique a spectrum belongs to
// ---------------------------------------------------------------------------

/// The two spectrum types extracted from a frequency calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpectrumKind {
    Ir,
    Raman,
}

impl SpectrumKind {
    /// Lowercase tag used in exported artifact names (`sample_ir.png`).
    pub fn file_tag(&self) -> &'static str {
        match self {
            SpectrumKind::Ir => "ir",
            SpectrumKind::Raman => "raman",
        }
    }

    /// Column header for the intensity column in CSV export.
    pub fn intensity_column(&self) -> String {
        format!("{self} Intensity")
    }
}

impl fmt::Display for SpectrumKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpectrumKind::Ir => write!(f, "IR"),
            SpectrumKind::Raman => write!(f, "Raman"),
        }
    }
}

// ---------------------------------------------------------------------------
// SpectralLine / StickSpectrum – the discrete representation
// ---------------------------------------------------------------------------

/// One discrete vibrational line: a normal-mode frequency (cm⁻¹) paired
/// with its intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpectralLine {
    pub frequency: f64,
    pub intensity: f64,
}

/// A stick spectrum: the ordered (frequency, intensity) pairs for one
/// spectrum kind, before broadening.
#[derive(Debug, Clone)]
pub struct StickSpectrum {
    pub kind: SpectrumKind,
    pub lines: Vec<SpectralLine>,
}

impl StickSpectrum {
    /// Pair a frequency sequence with an intensity sequence positionally.
    ///
    /// Both sequences accumulate in matching order across mode blocks, so
    /// equal lengths are expected from a well-formed document. On a
    /// mismatch the pairing truncates to the shorter sequence and logs a
    /// diagnostic; the unmatched tail is dropped rather than failing the
    /// whole document.
    pub fn pair(kind: SpectrumKind, frequencies: &[f64], intensities: &[f64]) -> Self {
        if frequencies.len() != intensities.len() && !intensities.is_empty() {
            log::warn!(
                "{kind}: {} frequencies but {} intensities; truncating to the shorter sequence",
                frequencies.len(),
                intensities.len()
            );
        }
        let lines = frequencies
            .iter()
            .zip(intensities.iter())
            .map(|(&frequency, &intensity)| SpectralLine {
                frequency,
                intensity,
            })
            .collect();
        StickSpectrum { kind, lines }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the spectrum has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// ---------------------------------------------------------------------------
// ParsedDocument – the complete extraction result
// ---------------------------------------------------------------------------

/// Everything extracted from one document: three positional-parallel value
/// sequences, whether Raman data was seen at all, and the atom count
/// (0 when the `NAtoms=` marker never appears).
///
/// Constructed once per document by [`extract`](crate::data::extract::extract)
/// and immutable afterwards.
#[derive(Debug, Clone, Default)]
pub struct ParsedDocument {
    pub frequencies: Vec<f64>,
    pub ir_intensities: Vec<f64>,
    pub raman_intensities: Vec<f64>,
    pub raman_present: bool,
    pub atom_count: u32,
}

impl ParsedDocument {
    /// Whether any frequency or intensity values were found. `false` means
    /// the caller should surface a "no data found" message.
    pub fn has_data(&self) -> bool {
        !self.frequencies.is_empty()
            || !self.ir_intensities.is_empty()
            || !self.raman_intensities.is_empty()
    }

    /// Whether every present intensity sequence matches the frequency
    /// count. `false` means the document was malformed or truncated;
    /// pairing will drop the unmatched tail.
    pub fn counts_consistent(&self) -> bool {
        let ir_ok =
            self.ir_intensities.is_empty() || self.ir_intensities.len() == self.frequencies.len();
        let raman_ok = self.raman_intensities.is_empty()
            || self.raman_intensities.len() == self.frequencies.len();
        ir_ok && raman_ok
    }

    /// The IR stick spectrum. Empty when no IR intensities were parsed.
    pub fn ir(&self) -> StickSpectrum {
        StickSpectrum::pair(SpectrumKind::Ir, &self.frequencies, &self.ir_intensities)
    }

    /// The Raman stick spectrum, or `None` when no `Raman Activ` marker was
    /// ever seen. `Some` with an empty spectrum means the marker appeared
    /// but no activity values could be parsed, which is worth a distinct
    /// warning at the caller.
    pub fn raman(&self) -> Option<StickSpectrum> {
        self.raman_present.then(|| {
            StickSpectrum::pair(
                SpectrumKind::Raman,
                &self.frequencies,
                &self.raman_intensities,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_matching_lengths() {
        let spectrum = StickSpectrum::pair(SpectrumKind::Ir, &[100.0, 200.0], &[5.0, 10.0]);
        assert_eq!(spectrum.len(), 2);
        assert_eq!(spectrum.lines[1].frequency, 200.0);
        assert_eq!(spectrum.lines[1].intensity, 10.0);
    }

    #[test]
    fn pair_truncates_to_shorter() {
        let spectrum = StickSpectrum::pair(
            SpectrumKind::Ir,
            &[100.0, 200.0, 300.0, 400.0],
            &[1.0, 2.0, 3.0],
        );
        assert_eq!(spectrum.len(), 3);
        assert_eq!(spectrum.lines[2].frequency, 300.0);
        assert_eq!(spectrum.lines[2].intensity, 3.0);
    }

    #[test]
    fn raman_absent_vs_present_but_empty() {
        let absent = ParsedDocument {
            frequencies: vec![100.0],
            ir_intensities: vec![1.0],
            ..Default::default()
        };
        assert!(absent.raman().is_none());

        let present_empty = ParsedDocument {
            frequencies: vec![100.0],
            ir_intensities: vec![1.0],
            raman_present: true,
            ..Default::default()
        };
        let raman = present_empty.raman().unwrap();
        assert!(raman.is_empty());
    }

    #[test]
    fn counts_consistent_flags_mismatch() {
        let doc = ParsedDocument {
            frequencies: vec![100.0, 200.0],
            ir_intensities: vec![1.0],
            ..Default::default()
        };
        assert!(!doc.counts_consistent());

        let ok = ParsedDocument {
            frequencies: vec![100.0, 200.0],
            ir_intensities: vec![1.0, 2.0],
            raman_intensities: vec![3.0, 4.0],
            raman_present: true,
            ..Default::default()
        };
        assert!(ok.counts_consistent());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(SpectrumKind::Ir.to_string(), "IR");
        assert_eq!(SpectrumKind::Raman.file_tag(), "raman");
        assert_eq!(SpectrumKind::Raman.intensity_column(), "Raman Intensity");
    }
}
