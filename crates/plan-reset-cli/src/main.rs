//! plan-reset - force every active plan into the abandoned state
//!
//! Sends one conditional bulk update to the backend and prints the status
//! code it answered with. Configuration comes from the environment:
//! - `SUPABASE_KEY` - API key (empty if unset; the backend will reject it)
//! - `SUPABASE_URL` - optional project URL override

use anyhow::{Context, Result};
use clap::Parser;

use plan_reset_core::{PlanResetter, ResetConfig, RestClient};

/// plan-reset - Abandon all active plans
#[derive(Parser)]
#[command(name = "plan-reset", version)]
#[command(about = "Mark every active plan as abandoned", long_about = None)]
struct Cli {
    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };

    // stdout is reserved for the status line
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = ResetConfig::from_env();
    tracing::debug!(?config, "Loaded configuration");
    if !config.has_credential() {
        tracing::warn!("SUPABASE_KEY is not set; the backend will likely reject the reset");
    }

    let client = RestClient::new(&config).context("invalid backend configuration")?;
    let outcome = PlanResetter::new(client)
        .reset_active_plans()
        .await
        .with_context(|| format!("reset request to {} failed", config.project_url))?;

    println!("{}", outcome.status_line());

    Ok(())
}
