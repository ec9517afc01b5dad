/// Data layer: core types and log extraction.
///
/// Architecture:
/// ```text
///  raw .log text
///        │
///        ▼
///   ┌──────────┐
///   │ extract   │  one pass over lines → ParsedDocument
///   └──────────┘
///        │
///        ▼
///   ┌────────────────┐
///   │ ParsedDocument  │  frequencies, IR / Raman intensities, atom count
///   └────────────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ StickSpectrum  │  positional (frequency, intensity) pairs per kind
///   └───────────────┘
/// ```
pub mod extract;
pub mod model;
