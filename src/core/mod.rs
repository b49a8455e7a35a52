//! Core data types
//!
//! Defines fundamental types:
//! - OptionChain: Column table of per-strike call/put quotes
//! - StrikeQuote: One row of the chain
//! - Leg: Option type, side and execution price
//! - ArbError: Crate error type

pub mod error;
pub mod option;
pub mod quote;

pub use error::*;
pub use option::*;
pub use quote::*;
