//! Extract IR/Raman vibrational spectra from quantum-chemistry output
//! logs, broaden them into continuous curves, and export PNG plots and
//! CSV tables.
//!
//! The pipeline is pure and request-scoped: the caller hands over decoded
//! log text and gets numeric arrays and encoded byte buffers back. No
//! filesystem access, no shared state between invocations.
//!
//! ```no_run
//! use vibrospec::data::extract::extract;
//! use vibrospec::spectrum::broaden::{broaden, BroadenOptions};
//! use vibrospec::spectrum::render::{render_png, PlotOptions};
//!
//! # fn demo(log_text: &str) -> Result<Vec<u8>, vibrospec::SpectrumError> {
//! let doc = extract(log_text);
//! let ir = doc.ir();
//! let curve = broaden(&ir.lines, &BroadenOptions::default())?;
//! render_png(&curve, &PlotOptions::default())
//! # }
//! ```

pub mod color;
pub mod data;
pub mod error;
pub mod spectrum;

pub use data::model::{ParsedDocument, SpectralLine, SpectrumKind, StickSpectrum};
pub use error::SpectrumError;
