use std::process;

use tracing_subscriber::EnvFilter;

use dossier_convert::{ConvertError, ConvertJob, ConvertOutcome, backends, convert, instructions};

fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let job = ConvertJob::beside_executable()?;

    println!("{:=<60}", "");
    println!("   DANSORT version history - PDF generator");
    println!("{:=<60}", "");

    match convert(&job, &backends::defaults()) {
        Ok(ConvertOutcome::Rendered { backend, .. }) => {
            println!("\nPDF generated with {backend}: {}", job.output.display());
            Ok(())
        }
        Ok(ConvertOutcome::Exhausted { attempts }) => {
            tracing::debug!(report = %serde_json::to_string(&attempts)?, "exhausted attempt report");
            println!("\n{}", instructions::remediation_text(&job, &attempts));
            Ok(())
        }
        Err(e @ ConvertError::InputMissing(_)) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
