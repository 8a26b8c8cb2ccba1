//! # Pitwall
//!
//! Motorsport race, driver and team statistics. A typed client-side store
//! with a pure view-composition layer, shared by a Leptos dashboard and a
//! command-line shell.
//!
//! ## Features
//!
//! - **Entity stores**: drivers, teams, races and the signed-in user
//! - **Intents**: a closed, serializable vocabulary of state changes
//! - **Snapshots**: every dispatch produces a new immutable root state
//! - **View composer**: chart series and totals derived on demand
//!
//! ## Modules
//!
//! - [`store`]: Records, intents, slices and the [`Store`] container
//! - [`views`]: Pure derivations for each dashboard page
//! - [`dataset`]: Dataset and intent-log loading
//! - `config` / `logging`: Native shell configuration (feature `native`)
//!
//! ## Quick Start
//!
//! ```rust
//! use pitwall::store::{Driver, DriverIntent, Store};
//! use pitwall::views::{comparison_radar, Palette};
//!
//! let mut store = Store::new();
//! store.dispatch(DriverIntent::SetDrivers(vec![
//!     Driver::new("ver", "Max Verstappen", 1),
//!     Driver::new("lec", "Charles Leclerc", 16),
//! ]));
//! store.dispatch(DriverIntent::ToggleComparison("ver".into()));
//! store.dispatch(DriverIntent::ToggleComparison("lec".into()));
//!
//! let radar = comparison_radar(&store.state().driver, &Palette::default());
//! assert_eq!(radar.series.len(), 2);
//! ```

#[cfg(feature = "native")]
pub mod config;
pub mod dataset;
#[cfg(feature = "native")]
pub mod logging;
pub mod store;
pub mod views;

// Re-export top-level types for convenience
pub use store::{Intent, RootState, Store, SubscriptionId};

pub use dataset::{Dataset, DatasetError, DatasetResult};

pub use views::{ChartData, Palette, Series};

#[cfg(feature = "native")]
pub use config::{Config, ConfigError, DataConfig, DisplayConfig, LoggingConfig};
