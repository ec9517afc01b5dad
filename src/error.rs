use thiserror::Error;

/// Failures produced by broadening, rendering, and export. Everything here
/// is recoverable at the caller; the library never terminates the process.
#[derive(Debug, Error)]
pub enum SpectrumError {
    /// Broadening was requested on a spectrum with no lines, so no
    /// frequency domain can be derived.
    #[error("no spectral lines: cannot derive a broadening domain")]
    EmptyDomain,

    #[error("broadening sigma must be a positive finite number, got {0}")]
    InvalidSigma(f64),

    #[error("broadened curve needs at least two sample points, got {0}")]
    InvalidSampleCount(usize),

    #[error("unrecognized color {0:?} (expected #RRGGBB or a named color)")]
    UnknownColor(String),

    #[error("plot rendering failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    PngEncode(#[from] image::ImageError),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
