use tracing::{debug, error};

use bonafide::collect::{self, TerminalConsole};
use bonafide::compose;
use bonafide::config::CertificateConfig;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(e) = run() {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = CertificateConfig::default();
    debug!("generating certificate at {}", config.output_path.display());

    let mut console = TerminalConsole::new();
    let record = collect::collect_record(&mut console)?;
    compose::render_certificate(&record, &config)?;

    println!(
        "Bonafide certificate has been generated as '{}'",
        config.output_path.display()
    );
    Ok(())
}
