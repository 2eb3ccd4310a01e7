//! dossier-convert
//!
//! HTML→PDF conversion with ordered backend fallback.
//!
//! Public API:
//! - [`ConvertJob`]: which HTML document to read and where the PDF goes
//! - [`RenderBackend`]: one impl per external rendering engine
//! - [`backends::defaults`]: the ordered engine list (headless Chrome, then wkhtmltopdf)
//! - [`convert`]: try each backend in order, stop at the first success
//! - [`instructions::remediation_text`]: manual-fallback block when every backend is out

pub mod backend;
pub mod backends;
pub mod convert;
pub mod error;
pub mod instructions;
pub mod job;
pub mod report;

pub use crate::backend::RenderBackend;
pub use crate::convert::convert;
pub use crate::error::ConvertError;
pub use crate::job::ConvertJob;
pub use crate::report::{AttemptReport, AttemptStatus, ConvertOutcome};
