use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vida_core::{config::resolve_config, constants::CLINIC_NAME_ENV, Registry};

mod menu;
mod text;

use menu::Console;

#[derive(Parser)]
#[command(name = "vida")]
#[command(about = "Vida+ clinic patient registry")]
struct Cli {
    /// Clinic name shown in the menu banner (falls back to VIDA_CLINIC_NAME)
    #[arg(long)]
    clinic_name: Option<String>,
}

/// Runs one interactive registry session on stdin/stdout.
///
/// Diagnostics go to stderr and are filtered with `RUST_LOG` (default: `warn`), so they
/// never interleave with the menu.
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let clinic_name = cli
        .clinic_name
        .or_else(|| std::env::var(CLINIC_NAME_ENV).ok());
    let cfg = resolve_config(clinic_name)?;

    let mut registry = Registry::new();
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Console::new(&cfg, stdin.lock(), stdout.lock()).run(&mut registry)?;

    Ok(())
}
