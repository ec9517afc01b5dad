use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use plotters::prelude::*;

use crate::color::{Rgb, IR_RED};
use crate::data::model::StickSpectrum;
use crate::error::SpectrumError;
use crate::spectrum::broaden::BroadenedCurve;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Spectroscopy convention: plots show 0–5000 cm⁻¹ with high frequency on
/// the left.
pub const X_WINDOW: (f64, f64) = (0.0, 5000.0);

/// Rendering parameters for one spectrum plot.
#[derive(Debug, Clone)]
pub struct PlotOptions {
    /// Spectrum label; the plot title becomes `"<label> Spectrum"`.
    pub label: String,
    /// Line color.
    pub color: Rgb,
    /// Image size in pixels.
    pub width: u32,
    pub height: u32,
    /// Displayed frequency window (low, high) in cm⁻¹.
    pub x_window: (f64, f64),
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            label: "IR".to_string(),
            color: IR_RED,
            width: 1000,
            height: 400,
            x_window: X_WINDOW,
        }
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Render a broadened curve as PNG bytes.
///
/// Draws into an in-memory RGB bitmap; no filesystem or display is
/// involved, so the result can cross a process or network boundary as-is.
/// Axes follow absorption-spectrum conventions: the frequency axis runs
/// high-to-low and the intensity axis is inverted so peaks point downward.
pub fn render_png(curve: &BroadenedCurve, opts: &PlotOptions) -> Result<Vec<u8>, SpectrumError> {
    let (x_lo, x_hi) = opts.x_window;
    let trace: Vec<(f64, f64)> = curve
        .points()
        .filter(|&(x, _)| x >= x_lo && x <= x_hi)
        .collect();
    draw_polylines(opts, headroom(curve.max_y()), vec![trace])
}

/// Render the discrete stick spectrum as PNG bytes: one vertical stem per
/// line, the pre-broadening view of the same data.
pub fn render_stick_png(
    spectrum: &StickSpectrum,
    opts: &PlotOptions,
) -> Result<Vec<u8>, SpectrumError> {
    if spectrum.is_empty() {
        return Err(SpectrumError::EmptyDomain);
    }
    let (x_lo, x_hi) = opts.x_window;
    let max_intensity = spectrum
        .lines
        .iter()
        .map(|l| l.intensity)
        .fold(0.0, f64::max);
    let stems: Vec<Vec<(f64, f64)>> = spectrum
        .lines
        .iter()
        .filter(|l| l.frequency >= x_lo && l.frequency <= x_hi)
        .map(|l| vec![(l.frequency, 0.0), (l.frequency, l.intensity)])
        .collect();
    draw_polylines(opts, headroom(max_intensity), stems)
}

/// Shared scaffolding: white background, caption, inverted axes, grid
/// mesh, one path element per polyline, then PNG-encode the bitmap.
fn draw_polylines(
    opts: &PlotOptions,
    y_top: f64,
    polylines: Vec<Vec<(f64, f64)>>,
) -> Result<Vec<u8>, SpectrumError> {
    let (x_lo, x_hi) = opts.x_window;
    let Rgb(r, g, b) = opts.color;
    let style = RGBColor(r, g, b).stroke_width(2);

    let mut buf = vec![0u8; opts.width as usize * opts.height as usize * 3];
    {
        let root =
            BitMapBackend::with_buffer(&mut buf, (opts.width, opts.height)).into_drawing_area();
        root.fill(&WHITE).map_err(render_err)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(format!("{} Spectrum", opts.label), ("sans-serif", 24))
            .margin(12)
            .x_label_area_size(42)
            .y_label_area_size(56)
            // Reversed ranges invert both axes: high frequency on the
            // left, peaks pointing downward.
            .build_cartesian_2d(x_hi..x_lo, y_top..0.0)
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .x_desc("Frequency (cm^-1)")
            .y_desc("Intensity")
            .draw()
            .map_err(render_err)?;

        chart
            .draw_series(
                polylines
                    .into_iter()
                    .map(|points| PathElement::new(points, style)),
            )
            .map_err(render_err)?;

        root.present().map_err(render_err)?;
    }

    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(&buf, opts.width, opts.height, ExtendedColorType::Rgb8)?;
    Ok(png)
}

/// Top of the (inverted) intensity axis, with 5% headroom so the tallest
/// peak does not touch the frame. All-zero data still gets a usable axis.
fn headroom(max_y: f64) -> f64 {
    if max_y > 0.0 {
        max_y * 1.05
    } else {
        1.0
    }
}

fn render_err<E: std::error::Error>(err: E) -> SpectrumError {
    SpectrumError::Render(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SpectralLine, SpectrumKind};
    use crate::spectrum::broaden::{broaden, BroadenOptions};

    const PNG_MAGIC: [u8; 4] = [0x89, b'P', b'N', b'G'];

    fn sample_curve() -> BroadenedCurve {
        let lines = [
            SpectralLine {
                frequency: 1600.0,
                intensity: 70.0,
            },
            SpectralLine {
                frequency: 3800.0,
                intensity: 7.0,
            },
        ];
        broaden(&lines, &BroadenOptions::default()).unwrap()
    }

    #[test]
    fn renders_encoded_png_of_requested_size() {
        let opts = PlotOptions::default();
        let bytes = render_png(&sample_curve(), &opts).unwrap();
        assert_eq!(&bytes[..4], &PNG_MAGIC);

        let img = image::load_from_memory(&bytes).unwrap();
        assert_eq!(img.width(), opts.width);
        assert_eq!(img.height(), opts.height);
    }

    #[test]
    fn renders_stick_plot() {
        let spectrum = StickSpectrum {
            kind: SpectrumKind::Raman,
            lines: vec![SpectralLine {
                frequency: 1200.0,
                intensity: 12.0,
            }],
        };
        let opts = PlotOptions {
            label: "Raman".to_string(),
            width: 400,
            height: 200,
            ..Default::default()
        };
        let bytes = render_stick_png(&spectrum, &opts).unwrap();
        assert_eq!(&bytes[..4], &PNG_MAGIC);
    }

    #[test]
    fn empty_stick_spectrum_is_a_named_error() {
        let spectrum = StickSpectrum {
            kind: SpectrumKind::Ir,
            lines: Vec::new(),
        };
        let err = render_stick_png(&spectrum, &PlotOptions::default()).unwrap_err();
        assert!(matches!(err, SpectrumError::EmptyDomain));
    }

    #[test]
    fn independent_renders_do_not_share_state() {
        let a = render_png(&sample_curve(), &PlotOptions::default()).unwrap();
        let b = render_png(&sample_curve(), &PlotOptions::default()).unwrap();
        assert_eq!(a, b);
    }
}
