//! Stopcast CLI
//!
//! Resolves a place name to the nearest MBTA stop and the current
//! weather there. Thin presentation layer: argument parsing, wiring,
//! and output formatting only. All logic lives in the application
//! pipeline.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;
use std::sync::Arc;

use application::{StopFinderService, StopSearchResult};
use clap::Parser;
use infrastructure::{AppConfig, GeocodingAdapter, TransitAdapter, WeatherAdapter};
use integration_geocoding::MapboxGeocodingClient;
use integration_transit::MbtaClient;
use integration_weather::OpenWeatherClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stopcast CLI
#[derive(Debug, Parser)]
#[command(name = "stopcast")]
#[command(author, version, about = "Nearest MBTA stop and weather for a place name", long_about = None)]
struct Cli {
    /// Place name or address to search near
    place_name: String,

    /// Transport type: T, Bus, or Commuter Rail (anything else searches all modes)
    #[arg(short, long)]
    transport: Option<String>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(log_filter_from_verbosity(cli.verbose))
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(&cli).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("Error: {message}");
            ExitCode::FAILURE
        }
    }
}

/// Wire the pipeline and resolve the requested place
async fn run(cli: &Cli) -> Result<String, String> {
    let config = AppConfig::load().map_err(|e| e.to_string())?;

    let geocoding = MapboxGeocodingClient::new(&config.geocoding).map_err(|e| e.to_string())?;
    let transit = MbtaClient::new(&config.transit).map_err(|e| e.to_string())?;
    let weather = OpenWeatherClient::new(&config.weather).map_err(|e| e.to_string())?;

    let service = StopFinderService::new(
        Arc::new(GeocodingAdapter::new(geocoding)),
        Arc::new(TransitAdapter::new(transit)),
        Arc::new(WeatherAdapter::new(weather)),
    );

    let result = service
        .find_stop_near(&cli.place_name, cli.transport.as_deref())
        .await
        .map_err(|e| e.to_string())?;

    present(&result)
}

/// Turn a pipeline result into terminal output
///
/// The "no stop matched" sentinel becomes the user-facing error message;
/// every other result renders as the four-line summary.
fn present(result: &StopSearchResult) -> Result<String, String> {
    if result.stop.is_not_found() {
        return Err("No nearby MBTA station found.".to_string());
    }

    let accessibility = if result.stop.wheelchair_accessible {
        "Yes"
    } else {
        "No"
    };

    Ok(format!(
        "Location: {}\n\
         Latitude: {:.4}, Longitude: {:.4}\n\
         The nearest MBTA stop is {}. Wheelchair accessible: {}\n\
         Current weather: {}",
        result.place_name,
        result.location.latitude(),
        result.location.longitude(),
        result.stop.name,
        accessibility,
        result.weather
    ))
}

/// Map `-v` count to a tracing env-filter directive
fn log_filter_from_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
