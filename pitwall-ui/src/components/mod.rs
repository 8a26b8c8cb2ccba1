//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod button;
pub mod card;
pub mod chart;
pub mod input;
pub mod loading;
pub mod nav;
pub mod toast;

pub use button::{Button, ButtonVariant};
pub use card::{Card, StatCard};
pub use chart::{Chart, ChartKind};
pub use input::Input;
pub use loading::{ChartSkeleton, Loading};
pub use nav::{Navbar, Sidebar};
pub use toast::Toast;
