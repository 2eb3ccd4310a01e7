use std::path::Path;

use dossier_convert::instructions::remediation_text;
use dossier_convert::{AttemptReport, AttemptStatus, ConvertJob};

fn exhausted_attempts() -> Vec<AttemptReport> {
    vec![
        AttemptReport {
            backend: "chromium".to_string(),
            status: AttemptStatus::Unavailable,
            reason: "chromium is not available: could not detect an executable".to_string(),
        },
        AttemptReport {
            backend: "wkhtmltopdf".to_string(),
            status: AttemptStatus::Failed,
            reason: "wkhtmltopdf conversion failed: exited with exit status: 1".to_string(),
        },
    ]
}

#[test]
fn lists_exactly_three_numbered_options_in_order() {
    let job = ConvertJob::beside(Path::new("/opt/docs"));
    let text = remediation_text(&job, &exhausted_attempts());

    let browser = text.find("1. Print from a browser").expect("option 1");
    let chrome = text.find("2. Install Google Chrome or Chromium").expect("option 2");
    let wkhtml = text.find("3. Install wkhtmltopdf").expect("option 3");
    assert!(browser < chrome && chrome < wkhtml);
    assert!(!text.contains("\n4."));
}

#[test]
fn names_the_job_paths_and_the_direct_command() {
    let job = ConvertJob::beside(Path::new("/opt/docs"));
    let text = remediation_text(&job, &exhausted_attempts());

    assert!(text.contains("/opt/docs/HISTORIAL_VERSIONES.html"));
    assert!(text.contains("HISTORIAL_VERSIONES_DANSORT.pdf"));
    assert!(text.contains(
        "wkhtmltopdf --enable-local-file-access \"/opt/docs/HISTORIAL_VERSIONES.html\" \"/opt/docs/HISTORIAL_VERSIONES_DANSORT.pdf\""
    ));
}

#[test]
fn includes_each_aggregated_failure_reason() {
    let job = ConvertJob::beside(Path::new("/opt/docs"));
    let attempts = exhausted_attempts();
    let text = remediation_text(&job, &attempts);

    for attempt in &attempts {
        assert!(text.contains(&attempt.reason), "missing: {}", attempt.reason);
    }
}

#[test]
fn omits_the_report_section_when_there_are_no_attempts() {
    let job = ConvertJob::beside(Path::new("/opt/docs"));
    let text = remediation_text(&job, &[]);

    assert!(!text.contains("What each backend reported"));
    assert!(text.contains("1. Print from a browser"));
}
