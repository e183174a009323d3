//! Utility functions.
//!
//! This module provides layout configuration and color parsing.

mod colors;
pub mod layout_config;

pub use colors::parse_color;
pub use layout_config::{ArrowLayoutConfig, LayoutConfig, NavigationConfig};
