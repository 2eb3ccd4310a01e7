use crate::job::ConvertJob;
use crate::report::AttemptReport;

/// Build the manual-fallback block shown when every backend is exhausted.
///
/// Opens with what each backend reported, then exactly three numbered
/// alternatives: print to PDF from a browser, install Chrome/Chromium, or
/// install wkhtmltopdf and run it by hand. Falling back here is a normal
/// completion, not a process failure.
pub fn remediation_text(job: &ConvertJob, attempts: &[AttemptReport]) -> String {
    let input = job.input.display();
    let output = job.output.display();
    let output_name = job
        .output
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| output.to_string());

    let mut text = String::from("No rendering backend could produce the PDF automatically.\n");

    if !attempts.is_empty() {
        text.push_str("\nWhat each backend reported:\n");
        for attempt in attempts {
            text.push_str(&format!("  - {}\n", attempt.reason));
        }
    }

    text.push_str(&format!(
        "
How to produce it manually:

1. Print from a browser: open

       {input}

   in Chrome or Firefox, press Ctrl+P (Cmd+P on macOS) and choose
   \"Save as PDF\", saving the result as {output_name}.

2. Install Google Chrome or Chromium, then run this tool again.

3. Install wkhtmltopdf (e.g. `sudo apt install wkhtmltopdf`), then run
   this tool again or invoke it directly:

       wkhtmltopdf --enable-local-file-access \"{input}\" \"{output}\"
"
    ));

    text
}
