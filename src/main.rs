use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};

use weather_advisor::advisor::{IntentRouter, render_outcome};
use weather_advisor::config::AdvisorConfig;
use weather_advisor::weather::{OpenWeatherClient, WeatherProvider};
use weather_advisor::{VERSION, logging, web};

#[derive(Parser)]
#[command(name = "weather-advisor", version = VERSION, about = "Weather safety advisories and travel chatbot")]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API (default)
    Serve,
    /// Ask the chatbot a single question
    Chat { message: String },
    /// Print the safety advisory for a place
    Advisory { location: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AdvisorConfig::load_from_path(cli.config).context("Failed to load configuration")?;
    if cli.verbose {
        config.logging.level = "debug".to_string();
    }
    logging::init(&config.logging);

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => web::run(&config).await,
        Command::Chat { message } => {
            let chatbot = IntentRouter::new(provider(&config)?);
            println!("{}", chatbot.route(&message).await);
            Ok(())
        }
        Command::Advisory { location } => {
            let outcome = provider(&config)?.fetch_current(&location).await;
            if let Err(e) = &outcome {
                eprintln!("{}", e.user_message());
            }
            println!("{}", render_outcome(&outcome));
            Ok(())
        }
    }
}

fn provider(config: &AdvisorConfig) -> anyhow::Result<Arc<dyn WeatherProvider>> {
    let client = OpenWeatherClient::new(&config.weather)
        .context("Failed to create weather client")?;
    Ok(Arc::new(client))
}
