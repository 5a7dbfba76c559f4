use anyhow::Context;
use clap::{Parser, Subcommand};
use dashboard_core::{Config, FetchError, WeatherDashboard, fetcher_from_config};
use inquire::{Password, PasswordDisplayMode, Text};
use tracing::debug;

use crate::render::{RenderOptions, render_report};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-dashboard", version, about = "Real-time weather with smart suggestions")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key in the config file.
    Configure {
        /// Key to store; prompted for when absent.
        #[arg(long)]
        api_key: Option<String>,
    },

    /// Show current weather, a suggestion and the forecast for a city.
    Show {
        /// City name, e.g. "Bangalore"; prompted for when absent.
        city: Option<String>,

        /// Number of forecast rows in the table.
        #[arg(long, default_value_t = 10)]
        rows: usize,

        /// Only show current conditions.
        #[arg(long)]
        no_forecast: bool,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure { api_key } => configure(api_key),
            Command::Show {
                city,
                rows,
                no_forecast,
            } => {
                let opts = RenderOptions {
                    rows,
                    show_forecast: !no_forecast,
                };
                show(city, opts).await
            }
        }
    }
}

fn configure(api_key: Option<String>) -> anyhow::Result<()> {
    let path = Config::config_file_path()?;
    let mut config = Config::load_from(&path)?;

    let api_key = match api_key {
        Some(key) => key,
        None => Password::new("OpenWeather API key:")
            .with_display_mode(PasswordDisplayMode::Masked)
            .without_confirmation()
            .prompt()
            .context("Failed to read API key")?,
    };

    config.set_api_key(api_key);
    config.require_api_key()?;
    config.save_to(&path)?;

    println!("✅ Saved API key to {}", path.display());
    Ok(())
}

async fn show(city: Option<String>, opts: RenderOptions) -> anyhow::Result<()> {
    let city = match city {
        Some(city) => city,
        None => Text::new("Enter City Name")
            .with_placeholder("Example: Bangalore")
            .prompt()
            .context("Failed to read city name")?,
    };

    let config = Config::load()?;
    debug!(base_url = %config.base_url, timeout_secs = config.timeout_secs, "Loaded config");

    let dashboard = WeatherDashboard::new(fetcher_from_config(&config)?);

    match dashboard.report(&city).await {
        Ok(report) => {
            print!("{}", render_report(&report, opts));
            Ok(())
        }
        Err(FetchError::EmptyCity) => Err(anyhow::anyhow!("⚠️ {}", FetchError::EmptyCity)),
        Err(err) => Err(anyhow::anyhow!("❌ {err}")),
    }
}
