mod client;
mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{business, headline};

#[derive(Parser)]
#[command(name = "bizline")]
#[command(about = "Bizline CLI - Manage business listings and their headlines")]
#[command(version)]
struct Cli {
    #[arg(long, global = true, help = "API server URL")]
    server: Option<String>,

    #[arg(long, global = true, help = "Output format", default_value = "table")]
    format: output::Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Configure CLI settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Manage businesses
    #[command(alias = "biz")]
    Business {
        #[command(subcommand)]
        command: business::Commands,
    },
    /// Generate a new headline without saving it
    Headline {
        #[arg(long)]
        name: String,
        #[arg(long)]
        location: String,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Set configuration values
    Set {
        #[arg(long)]
        server: Option<String>,
    },
    /// Show current configuration
    Show,
    /// Get config file path
    Path,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut cfg = config::Config::load()?;

    if let Some(server) = &cli.server {
        cfg.server = server.clone();
    }

    match cli.command {
        Commands::Config { command } => match command {
            ConfigCommands::Set { server } => {
                if let Some(s) = server {
                    cfg.server = s;
                }
                cfg.save()?;
                println!("Configuration saved");
            }
            ConfigCommands::Show => {
                println!("Server: {}", cfg.server);
            }
            ConfigCommands::Path => {
                println!("{}", config::config_path()?.display());
            }
        },
        Commands::Business { command } => {
            business::run(command, &cfg, cli.format).await?;
        }
        Commands::Headline { name, location } => {
            headline::run(&name, &location, &cfg, cli.format).await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_business_delete() {
        let cli = Cli::try_parse_from(["bizline", "business", "delete", "7", "--format", "json"])
            .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Business {
                command: business::Commands::Delete { id: 7 }
            }
        ));
        assert!(matches!(cli.format, output::Format::Json));
    }

    #[test]
    fn headline_requires_both_fields() {
        assert!(Cli::try_parse_from(["bizline", "headline", "--name", "Joe"]).is_err());
    }
}
