use std::ffi::OsString;
use std::process::Command;

use serde::{Deserialize, Serialize};

use crate::backend::RenderBackend;
use crate::error::ConvertError;
use crate::job::ConvertJob;

const NAME: &str = "wkhtmltopdf";

/// The binary is resolved through `PATH`.
const BIN: &str = "wkhtmltopdf";

/// Option set passed to the `wkhtmltopdf` binary.
///
/// Defaults: Letter pages, 10mm margins on every side, UTF-8 input, local
/// file access enabled so the document can reference sibling assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WkhtmltopdfOptions {
    pub page_size: String,
    pub margin_top: String,
    pub margin_right: String,
    pub margin_bottom: String,
    pub margin_left: String,
    pub encoding: String,
    pub enable_local_file_access: bool,
}

impl Default for WkhtmltopdfOptions {
    fn default() -> Self {
        Self {
            page_size: "Letter".to_string(),
            margin_top: "10mm".to_string(),
            margin_right: "10mm".to_string(),
            margin_bottom: "10mm".to_string(),
            margin_left: "10mm".to_string(),
            encoding: "UTF-8".to_string(),
            enable_local_file_access: true,
        }
    }
}

impl WkhtmltopdfOptions {
    /// Render the option set as CLI flags, ahead of the input/output paths.
    pub fn to_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "--page-size".into(),
            self.page_size.clone().into(),
            "--margin-top".into(),
            self.margin_top.clone().into(),
            "--margin-right".into(),
            self.margin_right.clone().into(),
            "--margin-bottom".into(),
            self.margin_bottom.clone().into(),
            "--margin-left".into(),
            self.margin_left.clone().into(),
            "--encoding".into(),
            self.encoding.clone().into(),
        ];
        if self.enable_local_file_access {
            args.push("--enable-local-file-access".into());
        }
        args
    }
}

/// The external `wkhtmltopdf` renderer, driven as a subprocess.
pub struct WkhtmltopdfBackend {
    options: WkhtmltopdfOptions,
}

impl WkhtmltopdfBackend {
    pub fn new(options: WkhtmltopdfOptions) -> Self {
        Self { options }
    }
}

impl RenderBackend for WkhtmltopdfBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn availability(&self) -> Result<(), ConvertError> {
        match Command::new(BIN).arg("--version").output() {
            Ok(out) if out.status.success() => Ok(()),
            Ok(out) => Err(ConvertError::unavailable(
                NAME,
                format!("`{BIN} --version` exited with {}", out.status),
            )),
            Err(e) => Err(ConvertError::unavailable(
                NAME,
                format!("cannot run `{BIN}`: {e}"),
            )),
        }
    }

    fn render(&self, job: &ConvertJob) -> Result<(), ConvertError> {
        let output = Command::new(BIN)
            .args(self.options.to_args())
            .arg(&job.input)
            .arg(&job.output)
            .output()
            .map_err(|e| ConvertError::render_failed(NAME, format!("failed to spawn `{BIN}`: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ConvertError::render_failed(
                NAME,
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        Ok(())
    }
}
