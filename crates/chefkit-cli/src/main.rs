//! CLI entry point - the composition root.
//!
//! Infrastructure is wired together only via `bootstrap`; command dispatch
//! routes to handlers.

use std::process::ExitCode;

use clap::Parser;

use chefkit_cli::handlers::download::DownloadArgs;
use chefkit_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers, logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env before parsing so env fallbacks see it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let ctx = bootstrap(&config)?;

    match cli.command {
        Commands::Download {
            name,
            version,
            dir,
            concurrency,
            staged,
        } => {
            let args = DownloadArgs {
                name: &name,
                version: version.as_deref(),
                dir,
                concurrency,
                staged,
            };
            handlers::download::execute(&ctx, args).await?;
        }
        Commands::Show { name, version } => {
            handlers::show::execute(&ctx, &name, version.as_deref()).await?;
        }
    }

    Ok(())
}
