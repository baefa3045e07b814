//! Application services - Use case implementations

mod dashboard_service;
pub mod forecast_table;

pub use dashboard_service::{CurrentConditions, Dashboard, DashboardService};
pub use forecast_table::{
    AFTERNOON_HOURS, ForecastRow, ForecastSection, ForecastView, MORNING_HOURS,
    TemperatureAverages, build_table, compute_averages,
};
