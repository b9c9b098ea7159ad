mod cli;
mod commands;
mod config;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use kidscare_client::{
    AuthorizedClient, ClientConfig, FileSessionStore, IdentityClient, PasswordService,
};

use cli::{Cli, Commands};
use output::print_error;

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    // Quiet by default; RUST_LOG opts into the library's tracing output.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let profile = &cli.profile;
    let format = config::resolve_format(cli.format, profile);

    match &cli.command {
        Commands::Login(args) => {
            let client = IdentityClient::new(client_config(&cli.server, profile)?);
            let store = session_store(profile)?;
            commands::auth::login(&client, &store, args).await?;
        }
        Commands::Logout => {
            commands::auth::logout(&session_store(profile)?).await?;
        }
        Commands::Whoami => {
            commands::auth::whoami(&session_store(profile)?, profile).await?;
        }
        Commands::Home => {
            commands::auth::home(&session_store(profile)?).await?;
        }
        Commands::Vaccines => {
            let client = make_authorized(&cli.server, profile)?;
            commands::records::vaccines(&client, format).await?;
        }
        Commands::Patients => {
            let client = make_authorized(&cli.server, profile)?;
            commands::records::patients(&client, format).await?;
        }
        Commands::ChangePassword(args) => {
            let service = PasswordService::new(client_config(&cli.server, profile)?);
            commands::password::change(&service, args).await?;
        }
        Commands::Config(args) => match &args.command {
            cli::ConfigCommands::Show => {
                let cfg = config::load_profile(profile)?;
                println!("{}: {}", "Profile".cyan(), profile);
                println!(
                    "{}: {}",
                    "Server".cyan(),
                    cfg.server.as_deref().unwrap_or("(not set)")
                );
                println!(
                    "{}: {}",
                    "Format".cyan(),
                    cfg.format.as_deref().unwrap_or("table")
                );
            }
            cli::ConfigCommands::Set(set_args) => {
                let mut cfg = config::load_profile(profile)?;
                match set_args.key.as_str() {
                    "server" => cfg.server = Some(set_args.value.clone()),
                    "format" => cfg.format = Some(set_args.value.clone()),
                    other => {
                        anyhow::bail!("Unknown config key: {other}. Valid keys: server, format")
                    }
                }
                config::save_profile(profile, cfg)?;
                output::print_success(&format!("Set {} = {}", set_args.key, set_args.value));
            }
        },
    }

    Ok(())
}

fn client_config(cli_server: &Option<String>, profile: &str) -> Result<ClientConfig> {
    let server = config::resolve_server(cli_server, profile)?;
    Ok(ClientConfig::new(&server)?)
}

fn session_store(profile: &str) -> Result<FileSessionStore> {
    Ok(FileSessionStore::new(config::session_path(profile)?))
}

fn make_authorized(cli_server: &Option<String>, profile: &str) -> Result<AuthorizedClient> {
    let config = client_config(cli_server, profile)?;
    let store = Arc::new(session_store(profile)?);
    Ok(AuthorizedClient::new(config, store))
}
