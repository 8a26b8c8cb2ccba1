//! API Module
//!
//! Dataset and intent-log fetching for the dashboard.

pub mod client;

pub use client::*;
