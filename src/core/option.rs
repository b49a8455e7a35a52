//! Option legs
//!
//! Which option is traded and on which side of the book.

use serde::{Deserialize, Serialize};

/// Option type (Call or Put)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionType {
    Call,
    Put,
}

impl OptionType {
    pub fn label(&self) -> &'static str {
        match self {
            OptionType::Call => "call",
            OptionType::Put => "put",
        }
    }
}

/// Side of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}

/// One executed leg of a parity trade
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub option_type: OptionType,
    pub side: Side,
    /// Execution price (the quote the side crosses)
    pub price: f64,
    pub strike: f64,
}

impl Leg {
    pub fn new(option_type: OptionType, side: Side, price: f64, strike: f64) -> Self {
        Self {
            option_type,
            side,
            price,
            strike,
        }
    }

    /// Signed cash flow of the leg: premium paid is negative
    pub fn cash_flow(&self) -> f64 {
        match self.side {
            Side::Buy => -self.price,
            Side::Sell => self.price,
        }
    }
}

impl std::fmt::Display for Leg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} @ {:.2}",
            self.side.label(),
            self.strike,
            self.option_type.label(),
            self.price
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cash_flow_sign() {
        let sold = Leg::new(OptionType::Call, Side::Sell, 6.0, 110.0);
        let bought = Leg::new(OptionType::Put, Side::Buy, 1.0, 110.0);

        assert_eq!(sold.cash_flow(), 6.0);
        assert_eq!(bought.cash_flow(), -1.0);
    }

    #[test]
    fn test_display() {
        let leg = Leg::new(OptionType::Put, Side::Sell, 3.0, 100.0);
        assert_eq!(leg.to_string(), "sell 100 put @ 3.00");
    }
}
