//! Plain-text rendering of the dashboard
//!
//! Section order: title, current weather, extra data, map, then either the
//! temperature averages or the forecast table. A failed build renders as a
//! single error line and nothing else.

use std::fmt::Display;

use application::error::ApplicationError;
use application::services::{Dashboard, ForecastRow, ForecastSection, TemperatureAverages};

use crate::map::render_map;

/// Application title
pub const TITLE: &str = "Enapló - Weather Map & Data Visualization App";

/// Prefix of the only line printed when fetching fails
pub const ERROR_PREFIX: &str = "Hiba történt az adatok lekérésekor";

/// Shown for an averaging window with no samples
const NO_DATA: &str = "nincs adat";

/// Leading marker of forecast rows whose wind matches the current wind
const HIGHLIGHT: &str = "»";

/// Render either the dashboard or the error line
pub fn render_outcome(outcome: &Result<Dashboard, ApplicationError>) -> String {
    match outcome {
        Ok(dashboard) => render_dashboard(dashboard),
        Err(e) => render_error(e),
    }
}

/// Single error line, newline-terminated
pub fn render_error(error: &dyn Display) -> String {
    format!("{ERROR_PREFIX}: {error}\n")
}

/// Render all dashboard sections
pub fn render_dashboard(dashboard: &Dashboard) -> String {
    let city = &dashboard.city;
    let current = &dashboard.current;
    let snapshot = &current.snapshot;

    let mut out = String::new();
    out.push_str(&format!("{TITLE}\n{}\n\n", "=".repeat(TITLE.chars().count())));

    out.push_str(&heading(&format!("Jelenlegi időjárás {city} városban")));
    out.push_str(&metric("Hőmérséklet (°C)", snapshot.temperature));
    out.push_str(&metric("Páratartalom (%)", snapshot.humidity.value()));
    out.push_str(&metric("Szélsebesség (m/s)", snapshot.wind_speed));
    out.push_str(&metric("Szélerősség", current.beaufort));
    out.push('\n');

    out.push_str(&heading("További időjárási adatok"));
    out.push_str(&metric("Légnyomás (hPa)", snapshot.pressure));
    out.push_str(&metric("Szélirány", current.wind_direction));
    out.push_str(&metric("Égkép", current.cloudiness));
    out.push('\n');

    out.push_str(&heading(&format!("Időjárási térkép {city} városban")));
    out.push_str(&render_map(snapshot.location));
    out.push('\n');

    match &dashboard.forecast {
        ForecastSection::Averages(averages) => {
            out.push_str(&heading(&format!("Hőmérsékleti átlagok {city} városban")));
            out.push_str(&render_averages(averages));
        },
        ForecastSection::Table { rows } => {
            out.push_str(&heading(&format!("Előrejelzés {city} városban")));
            out.push_str(&render_table(rows));
        },
    }

    out
}

fn heading(text: &str) -> String {
    format!("{text}\n{}\n", "-".repeat(text.chars().count()))
}

fn metric(label: &str, value: impl Display) -> String {
    format!("  {label:<20} {value}\n")
}

fn average(value: Option<f64>) -> String {
    value.map_or_else(|| NO_DATA.to_string(), |v| format!("{v:.2}"))
}

/// Morning and afternoon averages, `nincs adat` for empty windows
pub fn render_averages(averages: &TemperatureAverages) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<32} {}\n",
        "Délelőtti átlaghőmérséklet (°C)",
        average(averages.morning)
    ));
    out.push_str(&format!(
        "  {:<32} {}\n",
        "Délutáni átlaghőmérséklet (°C)",
        average(averages.afternoon)
    ));
    out
}

/// Forecast table, one line per entry
pub fn render_table(rows: &[ForecastRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "  {:<1} {:<16} {:>7} {:>6} {:>6} {:<12} {:<16} {:>6}  {}\n",
        "", "Dátum", "Hőm.", "Pára", "Szél", "Szélirány", "Égkép", "Csap.", "Szélerősség"
    ));

    if rows.is_empty() {
        out.push_str(&format!("  {NO_DATA}\n"));
        return out;
    }

    for row in rows {
        let marker = if row.matches_current_wind { HIGHLIGHT } else { "" };
        out.push_str(&format!(
            "  {:<1} {:<16} {:>7.1} {:>6} {:>6.1} {:<12} {:<16} {:>6.2}  {}\n",
            marker,
            row.local_time.format("%Y-%m-%d %H:%M").to_string(),
            row.temperature,
            row.humidity.value(),
            row.wind_speed,
            row.wind_direction.to_string(),
            row.cloudiness.label(),
            row.precipitation,
            row.beaufort,
        ));
    }

    if rows.iter().any(|row| row.matches_current_wind) {
        out.push_str(&format!(
            "\n  {HIGHLIGHT} a jelenlegi szélerősséggel egyező időpont\n"
        ));
    }
    out
}
