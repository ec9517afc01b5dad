use crate::data::model::SpectralLine;
use crate::error::SpectrumError;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Padding (in sigmas) added on each side of the stick frequency range;
/// beyond it every kernel contribution is negligible.
pub const DOMAIN_PADDING_SIGMAS: f64 = 10.0;

/// Broadening parameters. Defaults match common practice for vibrational
/// spectra: 10 cm⁻¹ width, 1000 samples.
#[derive(Debug, Clone, Copy)]
pub struct BroadenOptions {
    /// Gaussian width (standard deviation) in cm⁻¹.
    pub sigma: f64,
    /// Number of equally spaced samples across the domain.
    pub num_points: usize,
}

impl Default for BroadenOptions {
    fn default() -> Self {
        Self {
            sigma: 10.0,
            num_points: 1000,
        }
    }
}

// ---------------------------------------------------------------------------
// BroadenedCurve
// ---------------------------------------------------------------------------

/// The continuous curve derived from a stick spectrum: `num_points`
/// (x, y) samples over `[min(freq) - 10σ, max(freq) + 10σ]`. Owned by the
/// rendering step and regenerated on every request, never cached.
#[derive(Debug, Clone)]
pub struct BroadenedCurve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl BroadenedCurve {
    /// Iterate the samples as (x, y) pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Largest y sample. 0.0 for an all-zero curve.
    pub fn max_y(&self) -> f64 {
        self.y.iter().copied().fold(0.0, f64::max)
    }
}

// ---------------------------------------------------------------------------
// Broadening
// ---------------------------------------------------------------------------

/// Convolve a stick spectrum with an unnormalized Gaussian kernel.
///
/// Each sample is the superposition
/// `y(x) = Σ intensityᵢ · exp(-½ ((x - freqᵢ)/σ)²)`.
/// The kernel is deliberately not normalized to unit area: relative peak
/// heights in the curve must match the relative intensities of the sticks.
///
/// Fails with [`SpectrumError::EmptyDomain`] on an empty spectrum (the
/// min/max domain would be undefined) and rejects non-positive sigma or
/// fewer than two sample points.
pub fn broaden(
    lines: &[SpectralLine],
    opts: &BroadenOptions,
) -> Result<BroadenedCurve, SpectrumError> {
    if lines.is_empty() {
        return Err(SpectrumError::EmptyDomain);
    }
    if !opts.sigma.is_finite() || opts.sigma <= 0.0 {
        return Err(SpectrumError::InvalidSigma(opts.sigma));
    }
    if opts.num_points < 2 {
        return Err(SpectrumError::InvalidSampleCount(opts.num_points));
    }

    let min_freq = lines
        .iter()
        .map(|l| l.frequency)
        .fold(f64::INFINITY, f64::min);
    let max_freq = lines
        .iter()
        .map(|l| l.frequency)
        .fold(f64::NEG_INFINITY, f64::max);

    let lo = min_freq - DOMAIN_PADDING_SIGMAS * opts.sigma;
    let hi = max_freq + DOMAIN_PADDING_SIGMAS * opts.sigma;
    let step = (hi - lo) / (opts.num_points - 1) as f64;

    let x: Vec<f64> = (0..opts.num_points).map(|i| lo + step * i as f64).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| {
            lines
                .iter()
                .map(|line| {
                    let z = (xi - line.frequency) / opts.sigma;
                    line.intensity * (-0.5 * z * z).exp()
                })
                .sum()
        })
        .collect();

    Ok(BroadenedCurve { x, y })
}
