use crate::error::ConvertError;
use crate::job::ConvertJob;

/// One impl per external rendering engine.
///
/// A backend is an opaque capability that turns the job's HTML document
/// into the PDF artifact. HTML parsing, CSS layout and pagination are
/// entirely the engine's business.
pub trait RenderBackend: Send + Sync {
    /// Short identifier used in reports and log fields (e.g. "chromium").
    fn name(&self) -> &'static str;

    /// Cheap probe that the engine is usable on this machine, so a
    /// missing install is reported as unavailable rather than as an
    /// opaque launch failure.
    fn availability(&self) -> Result<(), ConvertError>;

    /// One blocking conversion attempt. Writes `job.output` on success.
    fn render(&self, job: &ConvertJob) -> Result<(), ConvertError>;
}
