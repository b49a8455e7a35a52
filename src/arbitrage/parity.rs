//! Parity predicate
//!
//! Sign test of `C - P - S + K`. Exactly zero is fair and matches neither
//! direction.

/// Parity delta `call - put - underlying + strike`
#[inline]
pub fn parity_delta(call_price: f64, put_price: f64, underlying: f64, strike: f64) -> f64 {
    call_price - put_price - underlying + strike
}

/// Conversion available: pass the call bid and the put ask
#[inline]
pub fn is_conversion(call_price: f64, put_price: f64, underlying: f64, strike: f64) -> bool {
    parity_delta(call_price, put_price, underlying, strike) > 0.0
}

/// Reversal available: pass the call ask and the put bid
#[inline]
pub fn is_reversal(call_price: f64, put_price: f64, underlying: f64, strike: f64) -> bool {
    parity_delta(call_price, put_price, underlying, strike) < 0.0
}

/// Round an edge to cents.
///
/// Rounds the exact decimal value of `value`, ties to even, so an edge of
/// 2.125 is 2.12 and 0.015 (stored just below) is 0.01.
pub fn round_edge(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_value_is_neither() {
        // 8 - 3 - 105 + 100 = 0
        assert!(!is_conversion(8.0, 3.0, 105.0, 100.0));
        assert!(!is_reversal(8.0, 3.0, 105.0, 100.0));
    }

    #[test]
    fn test_directions() {
        assert!(is_conversion(6.0, 1.0, 105.0, 110.0));
        assert!(!is_reversal(6.0, 1.0, 105.0, 110.0));

        assert!(is_reversal(7.0, 3.0, 105.0, 100.0));
        assert!(!is_conversion(7.0, 3.0, 105.0, 100.0));
    }

    #[test]
    fn test_round_edge() {
        assert_eq!(round_edge(1.234), 1.23);
        assert_eq!(round_edge(10.0), 10.0);
        assert_eq!(round_edge(-0.456), -0.46);
    }

    #[test]
    fn test_round_edge_ties_to_even() {
        // Exact binary ties
        assert_eq!(round_edge(0.125), 0.12);
        assert_eq!(round_edge(2.125), 2.12);
        assert_eq!(round_edge(0.375), 0.38);
        // 0.015 is stored slightly below the tie
        assert_eq!(round_edge(0.015), 0.01);
    }
}
