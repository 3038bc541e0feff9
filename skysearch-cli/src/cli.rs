use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use skysearch_core::{Config, WeatherApp};

use crate::{render, widget};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skysearch", version, about = "City weather search widget")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeatherMap API key.
    Configure,

    /// One-shot lookup: print current weather for a city and exit.
    Search {
        /// City name, e.g. "Chicago".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Search { city }) => search_once(&city).await,
            // No subcommand: run the interactive widget loop.
            None => widget::run().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeatherMap API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    config.set_api_key(api_key);
    config.save()?;

    let path = Config::config_file_path()?;
    println!("API key saved to {}", path.display());
    Ok(())
}

async fn search_once(city: &str) -> anyhow::Result<()> {
    let config = Config::load()?;
    let mut app = WeatherApp::from_config(&config);

    app.search_city(city).await;

    render::frame(&app);
    Ok(())
}
