//! State Management
//!
//! Global application state wrapping the Pitwall store snapshot.

pub mod global;

pub use global::{provide_global_state, GlobalState};
