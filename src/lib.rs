//! # Parity Arb - Put-Call Parity Arbitrage Scanner
//!
//! Scans a listed option chain for riskless arbitrage from put-call parity
//! violations and prices the best box spread.
//!
//! ## Overview
//!
//! For one expiry, `C - P - S + K` should be zero. When executable quotes
//! break this:
//! - **Conversion** (`> 0`): sell the call at the bid, buy the put at the ask
//! - **Reversal** (`< 0`): buy the call at the ask, sell the put at the bid
//! - **Box spread**: reversal at a lower strike + conversion at a higher one
//!
//! ## Key Components
//!
//! - **Core**: `OptionChain` column table, `StrikeQuote` rows, `ArbError`
//! - **Arbitrage**: parity predicate, first/best single-leg scanners, box spread search
//! - **Data**: CSV chain loader (NSE export layout)
//!
//! ## Usage
//!
//! ```rust
//! use parity_arb::prelude::*;
//!
//! let chain = OptionChain::from_rows(vec![
//!     StrikeQuote::new(6.5, 7.0, 3.0, 3.5, 100.0),
//!     StrikeQuote::new(6.0, 6.5, 0.5, 1.0, 110.0),
//! ])
//! .unwrap();
//!
//! let best = find_best_box_spread(&chain, 105.0).unwrap();
//! assert_eq!(best.theo, 10.0);
//! assert_eq!(best.cost, -1.0);
//! assert_eq!(best.net, 11.0);
//! ```
//!
//! ## What This Crate Does NOT Do
//!
//! - Model volatility, time value or financing
//! - Account for fees, slippage or early exercise
//! - Sort or repair the chain it is given

pub mod arbitrage;
pub mod core;
pub mod data;

/// Prelude with commonly used types
pub mod prelude {
    // Core types
    pub use crate::core::{
        ArbError, ArbResult, Leg, OptionChain, OptionType, Side, StrikeQuote,
    };

    // Scanners
    pub use crate::arbitrage::{
        find_best_box_spread,
        find_best_conversion,
        find_best_reversal,
        find_first_conversion,
        find_first_reversal,
        is_conversion,
        is_reversal,
        parity_delta,
        scan_chain,
        BoxSearch,
        BoxSpread,
        ChainScanner,
        Opportunity,
        OpportunityKind,
        ReversalLeg,
        ScanConfig,
        ScanReport,
    };

    // Data loading
    pub use crate::data::{load_chain, read_chain, ChainColumns, LoaderConfig};
}

// Re-export main types at crate root
pub use crate::core::{ArbError, ArbResult, OptionChain};
pub use crate::arbitrage::{BoxSpread, Opportunity, ScanReport};
