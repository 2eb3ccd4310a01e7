use crate::backend::RenderBackend;
use crate::error::ConvertError;
use crate::job::ConvertJob;
use crate::report::{AttemptReport, AttemptStatus, ConvertOutcome};

/// Try each backend in order and stop at the first success.
///
/// The only hard failure is a missing input document, checked before any
/// backend runs, so a failed run never touches the output. Backend trouble
/// is contained here: each unavailable or failing engine becomes an
/// [`AttemptReport`] and the next one is tried. When the list runs dry the
/// reports come back in [`ConvertOutcome::Exhausted`] so the caller can
/// show remediation instructions.
pub fn convert(
    job: &ConvertJob,
    backends: &[Box<dyn RenderBackend>],
) -> Result<ConvertOutcome, ConvertError> {
    job.ensure_input_exists()?;

    let mut attempts = Vec::with_capacity(backends.len());

    for backend in backends {
        let name = backend.name();

        let result = backend.availability().and_then(|()| {
            tracing::info!(backend = name, output = %job.output.display(), "rendering");
            backend.render(job)
        });

        match result {
            Ok(()) => {
                tracing::info!(backend = name, output = %job.output.display(), "artifact written");
                return Ok(ConvertOutcome::Rendered {
                    backend: name.to_string(),
                    attempts,
                });
            }
            Err(e) if e.is_recoverable() => {
                tracing::warn!(backend = name, error = %e, "attempt failed, trying next backend");
                attempts.push(attempt_report(name, &e));
            }
            Err(e) => return Err(e),
        }
    }

    tracing::warn!(
        attempts = attempts.len(),
        "all rendering backends exhausted"
    );
    Ok(ConvertOutcome::Exhausted { attempts })
}

fn attempt_report(backend: &str, error: &ConvertError) -> AttemptReport {
    let status = match error {
        ConvertError::BackendUnavailable { .. } => AttemptStatus::Unavailable,
        _ => AttemptStatus::Failed,
    };
    AttemptReport {
        backend: backend.to_string(),
        status,
        reason: error.to_string(),
    }
}
