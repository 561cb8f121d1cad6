use anyhow::Context;
use clap::{Parser, Subcommand};
use inquire::Password;
use weather_core::{Config, WeatherReport, WeatherService, provider_from_config};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Weather lookup web app")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the web front-end.
    Serve {
        /// Address to listen on; defaults to `server.bind` from the config file.
        #[arg(long)]
        bind: Option<String>,
    },

    /// Look up one city and print the report.
    Show {
        /// City name, e.g. "oklahoma city".
        city: String,
    },

    /// Store the OpenWeather API key in the config file.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let mut config = Config::load()?;

        match self.command {
            Command::Serve { bind } => {
                let bind = bind.unwrap_or_else(|| config.server.bind.clone());
                weather_web::serve(&config, &bind).await?;
            }
            Command::Show { city } => {
                let provider = provider_from_config(&config)?;
                let service = WeatherService::new(provider, &config.openweather);
                let report = service.lookup(&city).await?;
                print_report(&report);
            }
            Command::Configure => {
                let key = Password::new("OpenWeather API key:")
                    .without_confirmation()
                    .prompt()
                    .context("Failed to read API key")?;

                config.set_api_key(key);
                config.api_key()?;
                config.save()?;

                println!("Saved API key to {}", Config::config_file_path()?.display());
            }
        }

        Ok(())
    }
}

fn print_report(report: &WeatherReport) {
    let current = &report.current;

    println!("{} - {}", report.place_name, report.display_date);
    println!(
        "  {}°C, {} (min {}°C, max {}°C), wind {} m/s",
        current.temperature_c,
        current.condition,
        current.min_temperature_c,
        current.max_temperature_c,
        current.wind_speed,
    );
    for day in &report.forecast {
        println!("  {:<4} {:>4}°C  {}", day.day, day.temperature_c, day.condition);
    }
}
