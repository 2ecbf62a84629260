mod bootstrap;
mod cli;
mod commands;

use std::process::ExitCode;

use clap::Parser;
use ink_core::GalleryError;
use log::error;

use cli::{Cli, Command};
use commands::upload::UploadArgs;

#[tokio::main]
async fn main() -> ExitCode {
    // A .env file may carry INKARTA_SERVER_URL during development.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Err(err) = bootstrap::init_tracing_subscriber(cli.verbose) {
        eprintln!("Failed to initialize tracing: {err}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Gallery errors were already shown through the alert.
            if err.downcast_ref::<GalleryError>().is_none() {
                eprintln!("Error: {:#}", err);
            }
            error!("Command failed: {:#}", err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = bootstrap::resolve_config(cli.config.as_deref())?;
    if let Some(server) = cli.server {
        config.server_url = server;
    }
    let deps = bootstrap::wire_dependencies(&config)?;

    match cli.command {
        Command::List => commands::gallery::list(&deps).await,
        Command::Image { id, output, fit } => {
            let size = if fit {
                bootstrap::display_size(&config)
            } else {
                None
            };
            commands::gallery::image(&deps, id, output, size).await
        }
        Command::Upload {
            path,
            title,
            artist,
            dark,
            overwrite,
        } => {
            let args = UploadArgs {
                title,
                artist,
                dark,
                overwrite,
            };
            commands::upload::upload(&deps, &path, args).await
        }
        Command::Delete { positions } => commands::gallery::delete(&deps, positions).await,
        Command::Next { id } => commands::gallery::next(&deps, id).await,
    }
}
