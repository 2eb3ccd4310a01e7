use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConvertError;

/// Well-known name of the input document.
pub const INPUT_FILE: &str = "HISTORIAL_VERSIONES.html";

/// Well-known name of the output artifact, written next to the input.
pub const OUTPUT_FILE: &str = "HISTORIAL_VERSIONES_DANSORT.pdf";

/// One conversion: which HTML document to read and where the PDF goes.
///
/// Both paths are plain data. The input must exist before any backend is
/// tried ([`ConvertJob::ensure_input_exists`]). Nothing is checked on the
/// output: a backend that returns without error is assumed to have
/// written it, and a later run overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConvertJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConvertJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
        }
    }

    /// The well-known file names inside `dir`.
    pub fn beside(dir: &Path) -> Self {
        Self {
            input: dir.join(INPUT_FILE),
            output: dir.join(OUTPUT_FILE),
        }
    }

    /// Default layout: both files are siblings of the running executable.
    pub fn beside_executable() -> Result<Self, ConvertError> {
        let exe = env::current_exe()?;
        let dir = exe.parent().unwrap_or_else(|| Path::new("."));
        Ok(Self::beside(dir))
    }

    /// The one hard precondition of a run.
    pub fn ensure_input_exists(&self) -> Result<(), ConvertError> {
        if self.input.exists() {
            Ok(())
        } else {
            Err(ConvertError::InputMissing(self.input.clone()))
        }
    }
}
