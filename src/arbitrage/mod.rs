//! Put-call parity arbitrage
//!
//! For a single expiry, `C - P - S + K` should be zero. Quotes that break this
//! in either direction can be locked in without market risk:
//! - **Conversion**: sell the call at the bid, buy the put at the ask (`> 0`)
//! - **Reversal**: buy the call at the ask, sell the put at the bid (`< 0`)
//! - **Box spread**: a reversal at a lower strike paired with a conversion at a
//!   higher strike, paying the strike width at expiration
//!
//! Scans are single linear passes over ascending strikes:
//! 1. **Parity predicate**: sign test of the parity delta
//! 2. **Single-leg scanners**: first or best conversion/reversal
//! 3. **Box spread search**: best reversal+conversion pair in one pass

mod boxes;
mod config;
mod parity;
mod scanner;

pub use boxes::*;
pub use config::*;
pub use parity::*;
pub use scanner::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{Leg, OptionType, Side, StrikeQuote};

/// Direction of a parity trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OpportunityKind {
    /// Synthetic short forward: sell call, buy put
    Conversion,
    /// Synthetic long forward: buy call, sell put
    Reversal,
}

impl OpportunityKind {
    pub fn label(&self) -> &'static str {
        match self {
            OpportunityKind::Conversion => "conversion",
            OpportunityKind::Reversal => "reversal",
        }
    }

    /// Side taken on the call
    pub fn call_side(&self) -> Side {
        match self {
            OpportunityKind::Conversion => Side::Sell,
            OpportunityKind::Reversal => Side::Buy,
        }
    }

    /// Side taken on the put
    pub fn put_side(&self) -> Side {
        match self {
            OpportunityKind::Conversion => Side::Buy,
            OpportunityKind::Reversal => Side::Sell,
        }
    }
}

/// A single-strike conversion or reversal at current quotes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opportunity {
    pub kind: OpportunityKind,
    /// Call execution price (bid for conversions, ask for reversals)
    pub call_price: f64,
    /// Put execution price (ask for conversions, bid for reversals)
    pub put_price: f64,
    pub strike: f64,
    /// Absolute mispricing, rounded to cents
    pub edge: f64,
}

impl Opportunity {
    /// Conversion at this strike, given its (positive) parity delta
    pub fn conversion(quote: &StrikeQuote, delta: f64) -> Self {
        Self {
            kind: OpportunityKind::Conversion,
            call_price: quote.call_bid,
            put_price: quote.put_ask,
            strike: quote.strike,
            edge: round_edge(delta),
        }
    }

    /// Reversal at this strike, given its (negative) parity delta
    pub fn reversal(quote: &StrikeQuote, delta: f64) -> Self {
        Self {
            kind: OpportunityKind::Reversal,
            call_price: quote.call_ask,
            put_price: quote.put_bid,
            strike: quote.strike,
            edge: round_edge(-delta),
        }
    }

    pub fn call_leg(&self) -> Leg {
        Leg::new(
            OptionType::Call,
            self.kind.call_side(),
            self.call_price,
            self.strike,
        )
    }

    /// Premium received (positive) or paid (negative) opening both legs
    pub fn net_premium(&self) -> f64 {
        self.call_leg().cash_flow() + self.put_leg().cash_flow()
    }

    pub fn put_leg(&self) -> Leg {
        Leg::new(
            OptionType::Put,
            self.kind.put_side(),
            self.put_price,
            self.strike,
        )
    }
}

impl std::fmt::Display for Opportunity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {}, {} (edge {:.2})",
            self.kind.label(),
            self.call_leg(),
            self.put_leg(),
            self.edge
        )
    }
}

/// Best box spread found by [`find_best_box_spread`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxSpread {
    /// Strike of the reversal leg
    pub lower_strike: f64,
    /// Strike of the conversion leg
    pub upper_strike: f64,
    /// Value at expiration (strike width)
    pub theo: f64,
    /// Net debit to put the box on
    pub cost: f64,
    /// Riskless profit: theo - cost
    pub net: f64,
}

impl std::fmt::Display for BoxSpread {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "box {}/{}: theo {:.2}, cost {:.2}, net {:.2}",
            self.lower_strike, self.upper_strike, self.theo, self.cost, self.net
        )
    }
}

/// Results of every scan over one chain snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Underlying price used
    pub underlying: f64,
    /// Number of strikes scanned
    pub strikes: usize,
    pub first_reversal: Option<Opportunity>,
    pub best_reversal: Option<Opportunity>,
    pub first_conversion: Option<Opportunity>,
    pub best_conversion: Option<Opportunity>,
    pub best_box: Option<BoxSpread>,
    /// Snapshot time of the scanned chain, if known
    pub timestamp: Option<DateTime<Utc>>,
}

impl ScanReport {
    /// Any opportunity at all?
    pub fn has_opportunity(&self) -> bool {
        self.first_reversal.is_some() || self.first_conversion.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_legs() {
        let quote = StrikeQuote::new(6.0, 6.4, 0.8, 1.0, 110.0);
        let opp = Opportunity::conversion(&quote, 10.0);

        assert_eq!(opp.call_price, 6.0);
        assert_eq!(opp.put_price, 1.0);
        assert_eq!(opp.call_leg().side, Side::Sell);
        assert_eq!(opp.put_leg().side, Side::Buy);
        assert_eq!(opp.net_premium(), 5.0);
    }

    #[test]
    fn test_reversal_edge_is_positive() {
        let quote = StrikeQuote::new(6.5, 7.0, 3.0, 3.4, 100.0);
        let opp = Opportunity::reversal(&quote, -1.004);

        assert_eq!(opp.kind, OpportunityKind::Reversal);
        assert_eq!(opp.call_price, 7.0);
        assert_eq!(opp.put_price, 3.0);
        assert_eq!(opp.edge, 1.0);
        assert_eq!(
            opp.to_string(),
            "reversal: buy 100 call @ 7.00, sell 100 put @ 3.00 (edge 1.00)"
        );
    }
}
