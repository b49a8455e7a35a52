//! Data loading
//!
//! Handles:
//! - CSV option chain exports (NSE layout and a plain layout)

pub mod loader;

pub use loader::*;
