//! Enapló CLI
//!
//! Terminal weather dashboard backed by OpenWeatherMap.

#![allow(clippy::print_stdout)]

mod map;
mod render;

use std::path::PathBuf;
use std::sync::Arc;

use application::error::ApplicationError;
use application::services::{Dashboard, DashboardService, ForecastView};
use clap::{Parser, ValueEnum};
use infrastructure::{AppConfig, EnvSecretStore, SystemClock, TtlCache, WeatherAdapter};
use tracing::{debug, error};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Enapló CLI
#[derive(Parser)]
#[command(name = "enaplo-cli")]
#[command(author, version, about = "Enapló - Weather Map & Data Visualization App", long_about = None)]
struct Cli {
    /// City to show, defaults to `dashboard.default_city`
    city: Option<String>,

    /// Forecast presentation
    #[arg(long, value_enum)]
    view: Option<ViewArg>,

    /// Print the dashboard as JSON
    #[arg(long)]
    json: bool,

    /// Configuration file, defaults to ./config.toml when present
    #[arg(short, long, env = "ENAPLO_CONFIG")]
    config: Option<PathBuf>,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ViewArg {
    /// Morning and afternoon temperature averages
    Averages,
    /// Full forecast table
    Table,
}

impl From<ViewArg> for ForecastView {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Averages => Self::Averages,
            ViewArg::Table => Self::Table,
        }
    }
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Wire the adapter, optional cache and dashboard service from config
fn build_service(config: &AppConfig) -> Result<DashboardService, ApplicationError> {
    let api_key = config.weather.require_api_key()?;
    let mut adapter = WeatherAdapter::with_config(config.weather.client_config(), api_key)?;

    if config.cache.enabled {
        let cache = Arc::new(TtlCache::new(Arc::new(SystemClock)));
        adapter = adapter.with_cache(cache, config.cache.ttl());
    } else {
        debug!("Response cache disabled");
    }

    Ok(DashboardService::new(Arc::new(adapter)).with_timezone(config.dashboard.timezone))
}

async fn run(cli: &Cli) -> Result<Dashboard, ApplicationError> {
    let mut config = AppConfig::load_from(cli.config.as_deref())
        .map_err(|e| ApplicationError::Configuration(e.to_string()))?;
    config.resolve_secrets(&EnvSecretStore::new()).await?;

    let service = build_service(&config)?;
    let city = cli
        .city
        .as_deref()
        .unwrap_or_else(|| config.dashboard.default_city.as_str());
    let view = cli.view.map_or(config.dashboard.view, ForecastView::from);

    service.build_for(city, view).await
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = log_filter_from_verbosity(cli.verbose);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let outcome = run(&cli).await;

    match &outcome {
        Ok(dashboard) if cli.json => println!("{}", serde_json::to_string_pretty(dashboard)?),
        _ => print!("{}", render::render_outcome(&outcome)),
    }

    if let Err(e) = &outcome {
        error!(error = %e, "Dashboard build failed");
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn config_for(server: &MockServer) -> AppConfig {
        let mut config = AppConfig::default();
        config.weather.base_url = server.uri();
        config.weather.timeout_secs = 5;
        config.weather.api_key = Some(SecretString::from("test-key".to_string()));
        config
    }

    #[test]
    fn log_filter_verbosity_zero() {
        assert_eq!(log_filter_from_verbosity(0), "warn");
    }

    #[test]
    fn log_filter_verbosity_one() {
        assert_eq!(log_filter_from_verbosity(1), "info");
    }

    #[test]
    fn log_filter_verbosity_two() {
        assert_eq!(log_filter_from_verbosity(2), "debug");
    }

    #[test]
    fn log_filter_verbosity_three_or_more() {
        assert_eq!(log_filter_from_verbosity(3), "trace");
        assert_eq!(log_filter_from_verbosity(10), "trace");
    }

    #[test]
    fn view_arg_maps_to_forecast_view() {
        assert_eq!(ForecastView::from(ViewArg::Averages), ForecastView::Averages);
        assert_eq!(ForecastView::from(ViewArg::Table), ForecastView::Table);
    }

    #[test]
    fn cli_defaults() {
        let cli = parse(&["enaplo-cli"]);
        assert!(cli.city.is_none());
        assert!(cli.view.is_none());
        assert!(!cli.json);
    }

    #[test]
    fn cli_city_and_view() {
        let cli = parse(&["enaplo-cli", "Szeged", "--view", "averages", "-vv"]);
        assert_eq!(cli.city.as_deref(), Some("Szeged"));
        assert_eq!(cli.view, Some(ViewArg::Averages));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn config_path_can_come_from_environment() {
        let help = <Cli as clap::CommandFactory>::command().render_help().to_string();
        assert!(help.contains("ENAPLO_CONFIG"));
    }

    #[test]
    fn missing_api_key_fails_before_network() {
        let config = AppConfig::default();
        assert!(matches!(
            build_service(&config),
            Err(ApplicationError::Configuration(_))
        ));
    }

    #[tokio::test]
    async fn upstream_error_renders_only_error_line() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(500).set_body_string("Internal Server Error"),
            )
            .mount(&server)
            .await;

        let service = build_service(&config_for(&server)).unwrap();
        let outcome = service.build_for("Budapest", ForecastView::Table).await;
        let text = render::render_outcome(&outcome);

        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Hiba történt az adatok lekérésekor: "));
        assert!(!text.contains("Hőmérséklet"));
        assert!(!text.contains("Dátum"));
    }

    #[tokio::test]
    async fn successful_build_renders_dashboard() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "coord": { "lon": 19.0399, "lat": 47.498 },
                "weather": [{ "description": "broken clouds" }],
                "main": { "temp": 12.3, "pressure": 1009, "humidity": 81 },
                "wind": { "speed": 4.2, "deg": 315 },
                "name": "Budapest"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "list": [
                    {
                        "dt": 1_718_006_400,
                        "main": { "temp": 18.0, "humidity": 70 },
                        "weather": [{ "description": "few clouds" }],
                        "wind": { "speed": 4.0, "deg": 300 }
                    }
                ]
            })))
            .mount(&server)
            .await;

        let service = build_service(&config_for(&server)).unwrap();
        let outcome = service.build_for("budapest", ForecastView::Table).await;
        let text = render::render_outcome(&outcome);

        assert!(text.contains("Jelenlegi időjárás Budapest városban"));
        assert!(text.contains("Erősen felhős"));
        assert!(text.contains("315° (ÉNY)"));
        assert!(text.contains("»"));
    }
}
