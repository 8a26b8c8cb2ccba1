//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod driver_comparison;
pub mod profile;
pub mod race_analytics;
pub mod team_analytics;

pub use dashboard::Dashboard;
pub use driver_comparison::DriverComparison;
pub use profile::Profile;
pub use race_analytics::RaceAnalytics;
pub use team_analytics::TeamAnalytics;
