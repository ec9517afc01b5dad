/// Spectrum layer: broadening, rendering, and tabular export.
///
/// ```text
///   StickSpectrum ──broaden──▶ BroadenedCurve ──render_png──▶ PNG bytes
///        │                                       (in-memory bitmap)
///        ├──render_stick_png──▶ PNG bytes
///        └──to_csv───────────▶ CSV bytes
/// ```
pub mod broaden;
pub mod export;
pub mod render;
