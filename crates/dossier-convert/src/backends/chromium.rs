use std::fs;

use headless_chrome::Browser;
use headless_chrome::browser::default_executable;
use headless_chrome::types::PrintToPdfOptions;
use url::Url;

use crate::backend::RenderBackend;
use crate::error::ConvertError;
use crate::job::ConvertJob;

const NAME: &str = "chromium";

/// Headless Chrome/Chromium print-to-PDF.
///
/// Navigates a `file://` URL to the input document and asks the DevTools
/// protocol to print it. Takes no options beyond the job paths; background
/// printing and CSS page sizes are honored so the document styles itself.
#[derive(Debug, Default)]
pub struct ChromiumBackend;

impl ChromiumBackend {
    pub fn new() -> Self {
        Self
    }

    fn print_to_pdf(&self, job: &ConvertJob) -> anyhow::Result<()> {
        // Url::from_file_path wants an absolute path.
        let input = job.input.canonicalize()?;
        let file_url = Url::from_file_path(&input)
            .map_err(|_| anyhow::anyhow!("cannot express {} as a file:// URL", input.display()))?;

        let browser = Browser::default()?;
        let tab = browser.new_tab()?;
        tab.navigate_to(file_url.as_str())?;
        tab.wait_until_navigated()?;

        let pdf = tab.print_to_pdf(Some(PrintToPdfOptions {
            print_background: Some(true),
            prefer_css_page_size: Some(true),
            ..Default::default()
        }))?;

        fs::write(&job.output, &pdf)?;
        Ok(())
    }
}

impl RenderBackend for ChromiumBackend {
    fn name(&self) -> &'static str {
        NAME
    }

    fn availability(&self) -> Result<(), ConvertError> {
        // Same lookup the launcher itself performs.
        default_executable()
            .map(|_| ())
            .map_err(|reason| ConvertError::unavailable(NAME, reason))
    }

    fn render(&self, job: &ConvertJob) -> Result<(), ConvertError> {
        self.print_to_pdf(job)
            .map_err(|e| ConvertError::render_failed(NAME, format!("{e:#}")))
    }
}
