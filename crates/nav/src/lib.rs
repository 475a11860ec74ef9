//! # Nav Crate
//!
//! Collapsible navigation panel for narrow layouts: one controller owning
//! the open/closed state, the toggle's `aria-expanded` flag, and the rules
//! for closing on link activation, outside clicks, and viewport widening.

#![forbid(unsafe_code)]

pub mod binding;
pub mod config;
pub mod controller;
pub mod error;
pub mod state;

pub use binding::{NavHandle, install};
pub use config::{DEFAULT_BREAKPOINT, NavConfig};
pub use controller::{NavElements, NavPanelController};
pub use error::ConfigError;
pub use state::{PanelState, PointerHit, Trigger, transition};
