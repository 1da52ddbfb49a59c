use anyhow::Result;
use clap::{Parser, Subcommand};
use dossier_core::synthesis::{GenderFilter, RegionFilter};
use url::Url;

mod commands;
mod context;
mod logging;
mod render;

use context::{AppContext, GlobalArgs};

#[derive(Parser)]
#[command(name = "dossier")]
#[command(version, about = "Dossier - synthetic persona generation", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Synthesize one persona and print its dossier
    Generate {
        /// Pin a region instead of drawing from the pool
        #[arg(long, default_value = "All")]
        region: RegionFilter,
        /// Constrain the gender (Male, Female, Non-binary)
        #[arg(long, default_value = "All")]
        gender: GenderFilter,
    },
    /// List the history, newest first
    History,
    /// Print a dossier (default: most recent)
    Show { id: Option<String> },
    /// Print the share link for a persona (default: most recent)
    Share { id: Option<String> },
    /// Print the plain-text summary for a persona (default: most recent)
    Export { id: Option<String> },
    /// Open an address, showing the shared dossier it carries
    Open { url: Url },
    /// List region filter options
    Regions,
    /// List profession archetypes
    Archetypes,
    /// Interactive session, optionally starting from a shared address
    Session { url: Option<Url> },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logs_dir = cli.global.paths().logs_dir().ok();
    let _log_guard = logging::init(cli.global.verbose, logs_dir.as_deref());

    let ctx = AppContext::load(&cli.global)?;
    tracing::debug!("[Bootstrap] Share base URL: {}", ctx.base_url());

    match cli.command {
        Commands::Generate { region, gender } => {
            commands::generate::run(&ctx, region, gender).await?
        }
        Commands::History => commands::archive::history(&ctx).await?,
        Commands::Show { id } => commands::archive::show(&ctx, id.as_deref()).await?,
        Commands::Share { id } => commands::archive::share(&ctx, id.as_deref()).await?,
        Commands::Export { id } => commands::archive::export(&ctx, id.as_deref()).await?,
        Commands::Open { url } => commands::open::run(&ctx, &url).await?,
        Commands::Regions => commands::catalog::regions(),
        Commands::Archetypes => commands::catalog::archetypes(),
        Commands::Session { url } => commands::session::run(&ctx, url.as_ref()).await?,
    }

    Ok(())
}
