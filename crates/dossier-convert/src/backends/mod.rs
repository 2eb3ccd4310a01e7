//! The external rendering engines, one module each.

pub mod chromium;
pub mod wkhtmltopdf;

pub use chromium::ChromiumBackend;
pub use wkhtmltopdf::{WkhtmltopdfBackend, WkhtmltopdfOptions};

use crate::backend::RenderBackend;

/// The ordered capability list: headless Chrome first, wkhtmltopdf second.
pub fn defaults() -> Vec<Box<dyn RenderBackend>> {
    vec![
        Box::new(ChromiumBackend::new()),
        Box::new(WkhtmltopdfBackend::new(WkhtmltopdfOptions::default())),
    ]
}
