use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("input document not found: {}", .0.display())]
    InputMissing(PathBuf),

    #[error("{backend} is not available: {reason}")]
    BackendUnavailable {
        backend: &'static str,
        reason: String,
    },

    #[error("{backend} conversion failed: {reason}")]
    RenderFailed {
        backend: &'static str,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    pub fn unavailable(backend: &'static str, reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend,
            reason: reason.into(),
        }
    }

    pub fn render_failed(backend: &'static str, reason: impl Into<String>) -> Self {
        Self::RenderFailed {
            backend,
            reason: reason.into(),
        }
    }

    /// Whether the next backend in the list may still be tried.
    ///
    /// Only a missing input document is fatal; everything a backend can
    /// produce is contained by the converter loop.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InputMissing(_))
    }
}
