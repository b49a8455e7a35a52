//! Single-leg scanners and the ChainScanner facade
//!
//! First-match scans stop at the lowest qualifying strike. Best-match scans
//! look at every strike and keep the largest edge, comparing unrounded deltas
//! and keeping the earlier strike on ties.

use crate::core::{ArbError, ArbResult, OptionChain};

use super::{
    find_best_box_spread, is_conversion, is_reversal, parity_delta, Opportunity, ScanConfig,
    ScanReport,
};

/// Lowest strike where a conversion (sell call bid, buy put ask) pays
pub fn find_first_conversion(chain: &OptionChain, underlying: f64) -> Option<Opportunity> {
    chain
        .rows()
        .find(|q| is_conversion(q.call_bid, q.put_ask, underlying, q.strike))
        .map(|q| {
            let delta = parity_delta(q.call_bid, q.put_ask, underlying, q.strike);
            Opportunity::conversion(&q, delta)
        })
}

/// Conversion with the largest edge
pub fn find_best_conversion(chain: &OptionChain, underlying: f64) -> Option<Opportunity> {
    // Fair market baseline
    let mut best_delta = 0.0;
    let mut best = None;

    for q in chain.rows() {
        if !is_conversion(q.call_bid, q.put_ask, underlying, q.strike) {
            continue;
        }
        let delta = parity_delta(q.call_bid, q.put_ask, underlying, q.strike);
        if delta > best_delta {
            best_delta = delta;
            best = Some(Opportunity::conversion(&q, delta));
        }
    }

    best
}

/// Lowest strike where a reversal (buy call ask, sell put bid) pays
pub fn find_first_reversal(chain: &OptionChain, underlying: f64) -> Option<Opportunity> {
    chain
        .rows()
        .find(|q| is_reversal(q.call_ask, q.put_bid, underlying, q.strike))
        .map(|q| {
            let delta = parity_delta(q.call_ask, q.put_bid, underlying, q.strike);
            Opportunity::reversal(&q, delta)
        })
}

/// Reversal with the most negative parity delta
pub fn find_best_reversal(chain: &OptionChain, underlying: f64) -> Option<Opportunity> {
    let mut best_delta = 0.0;
    let mut best = None;

    for q in chain.rows() {
        if !is_reversal(q.call_ask, q.put_bid, underlying, q.strike) {
            continue;
        }
        let delta = parity_delta(q.call_ask, q.put_bid, underlying, q.strike);
        if delta < best_delta {
            best_delta = delta;
            best = Some(Opportunity::reversal(&q, delta));
        }
    }

    best
}

/// Runs every scan over a chain snapshot
pub struct ChainScanner {
    config: ScanConfig,
}

impl ChainScanner {
    /// Create a new scanner with default configuration
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Create with custom configuration
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Get current configuration
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Run the four single-leg scans and the box spread search
    ///
    /// # Errors
    /// `InvalidInput` if strikes are not ascending and the config rejects that
    pub fn scan(&self, chain: &OptionChain, underlying: f64) -> ArbResult<ScanReport> {
        if !underlying.is_finite() {
            return Err(ArbError::invalid_input(format!(
                "underlying price must be finite, got {}",
                underlying
            )));
        }

        if !chain.is_strike_ascending() {
            if self.config.reject_unsorted_strikes {
                return Err(ArbError::invalid_input(
                    "strikes are not in ascending order",
                ));
            }
            if self.config.warn_on_unsorted_strikes {
                tracing::warn!(
                    strikes = chain.len(),
                    "Strikes are not ascending; box spread widths may be negative"
                );
            }
        }

        let report = ScanReport {
            underlying,
            strikes: chain.len(),
            first_reversal: find_first_reversal(chain, underlying),
            best_reversal: find_best_reversal(chain, underlying),
            first_conversion: find_first_conversion(chain, underlying),
            best_conversion: find_best_conversion(chain, underlying),
            best_box: find_best_box_spread(chain, underlying),
            timestamp: chain.timestamp(),
        };

        tracing::debug!(
            strikes = report.strikes,
            reversal = report.best_reversal.is_some(),
            conversion = report.best_conversion.is_some(),
            best_box_net = report.best_box.map(|b| b.net),
            "Scanned chain"
        );

        Ok(report)
    }
}

impl Default for ChainScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to scan with default configuration
pub fn scan_chain(chain: &OptionChain, underlying: f64) -> ArbResult<ScanReport> {
    ChainScanner::new().scan(chain, underlying)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arbitrage::OpportunityKind;
    use crate::core::StrikeQuote;
    use approx::assert_relative_eq;

    const SPOT: f64 = 105.0;

    /// Strikes 95..115 around a spot of 105.
    ///
    /// Parity deltas (reversal side / conversion side):
    /// - 95:  -0.5 / -1.5
    /// - 100: -2.0 / -3.0
    /// - 105: +0.0 / -1.0
    /// - 110: +2.0 / +1.5
    /// - 115: +3.5 / +3.5
    fn test_chain() -> OptionChain {
        OptionChain::from_rows(vec![
            StrikeQuote::new(12.0, 13.0, 3.5, 3.5, 95.0),
            StrikeQuote::new(8.0, 9.0, 6.0, 6.0, 100.0),
            StrikeQuote::new(5.0, 6.0, 6.0, 6.0, 105.0),
            StrikeQuote::new(3.0, 3.5, 6.5, 6.5, 110.0),
            StrikeQuote::new(2.0, 2.0, 8.5, 8.5, 115.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_first_and_best_reversal() {
        let chain = test_chain();

        let first = find_first_reversal(&chain, SPOT).unwrap();
        assert_eq!(first.kind, OpportunityKind::Reversal);
        assert_eq!(first.strike, 95.0);
        assert_relative_eq!(first.edge, 0.5);

        let best = find_best_reversal(&chain, SPOT).unwrap();
        assert_eq!(best.strike, 100.0);
        assert_eq!(best.call_price, 9.0);
        assert_eq!(best.put_price, 6.0);
        assert_relative_eq!(best.edge, 2.0);
    }

    #[test]
    fn test_first_and_best_conversion() {
        let chain = test_chain();

        let first = find_first_conversion(&chain, SPOT).unwrap();
        assert_eq!(first.kind, OpportunityKind::Conversion);
        assert_eq!(first.strike, 110.0);
        assert_relative_eq!(first.edge, 1.5);

        let best = find_best_conversion(&chain, SPOT).unwrap();
        assert_eq!(best.strike, 115.0);
        assert_eq!(best.call_price, 2.0);
        assert_eq!(best.put_price, 8.5);
        assert_relative_eq!(best.edge, 3.5);
    }

    #[test]
    fn test_edge_rounds_eighths_to_even() {
        // 3.125 - 1 - 100 + 100 = 2.125
        let chain =
            OptionChain::from_rows(vec![StrikeQuote::new(3.125, 3.5, 0.5, 1.0, 100.0)]).unwrap();

        assert_eq!(find_first_conversion(&chain, 100.0).unwrap().edge, 2.12);
        assert_eq!(find_best_conversion(&chain, 100.0).unwrap().edge, 2.12);
    }

    #[test]
    fn test_ties_keep_first_strike() {
        let chain = OptionChain::from_rows(vec![
            StrikeQuote::new(6.0, 6.5, 0.5, 1.0, 110.0),
            StrikeQuote::new(1.0, 1.5, 0.5, 1.0, 115.0),
        ])
        .unwrap();

        // Both strikes have a conversion delta of 10
        let best = find_best_conversion(&chain, SPOT).unwrap();
        assert_eq!(best.strike, 110.0);
    }

    #[test]
    fn test_reversal_ties_keep_first_strike() {
        let chain = OptionChain::from_rows(vec![
            StrikeQuote::new(6.5, 7.0, 3.0, 3.5, 100.0),
            StrikeQuote::new(0.5, 1.0, 7.0, 7.5, 110.0),
        ])
        .unwrap();

        // Both strikes have a reversal delta of -1
        let best = find_best_reversal(&chain, SPOT).unwrap();
        assert_eq!(best.strike, 100.0);
        assert_eq!(best.call_price, 7.0);
        assert_relative_eq!(best.edge, 1.0);
    }

    #[test]
    fn test_best_uses_unrounded_delta() {
        // Deltas 1.006 and 1.009 both round to 1.01; the larger raw delta wins
        let chain = OptionChain::from_rows(vec![
            StrikeQuote::new(2.006, 2.5, 0.5, 1.0, 106.0),
            StrikeQuote::new(2.009, 2.5, 0.5, 1.0, 106.0),
        ])
        .unwrap();

        let best = find_best_conversion(&chain, SPOT).unwrap();
        assert_eq!(best.call_price, 2.009);
        assert_relative_eq!(best.edge, 1.01);
    }

    #[test]
    fn test_nothing_found() {
        // Exactly fair at every strike
        let chain = OptionChain::from_rows(vec![
            StrikeQuote::new(8.0, 8.0, 3.0, 3.0, 100.0),
            StrikeQuote::new(3.0, 3.0, 3.0, 3.0, 105.0),
        ])
        .unwrap();

        assert!(find_first_conversion(&chain, SPOT).is_none());
        assert!(find_best_conversion(&chain, SPOT).is_none());
        assert!(find_first_reversal(&chain, SPOT).is_none());
        assert!(find_best_reversal(&chain, SPOT).is_none());

        let empty = OptionChain::from_rows(Vec::new()).unwrap();
        assert!(find_first_conversion(&empty, SPOT).is_none());
        assert!(find_best_reversal(&empty, SPOT).is_none());
    }

    #[test]
    fn test_scan_report() {
        let chain = test_chain();
        let report = ChainScanner::new().scan(&chain, SPOT).unwrap();

        assert_eq!(report.strikes, 5);
        assert!(report.has_opportunity());
        assert_eq!(report.best_reversal, find_best_reversal(&chain, SPOT));
        assert_eq!(report.best_conversion, find_best_conversion(&chain, SPOT));
        assert_eq!(report.best_box, find_best_box_spread(&chain, SPOT));
        assert_eq!(report.timestamp, None);
    }

    #[test]
    fn test_scan_report_is_reproducible() {
        let rows: Vec<_> = test_chain().rows().collect();
        let a = scan_chain(&OptionChain::from_rows(rows.clone()).unwrap(), SPOT).unwrap();
        let b = scan_chain(&OptionChain::from_rows(rows).unwrap(), SPOT).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn test_scan_rejects_unsorted_when_strict() {
        let rows: Vec<_> = test_chain().rows().collect();
        let chain = OptionChain::from_rows(rows.into_iter().rev()).unwrap();

        assert!(ChainScanner::new().scan(&chain, SPOT).is_ok());
        assert!(matches!(
            ChainScanner::with_config(ScanConfig::strict()).scan(&chain, SPOT),
            Err(ArbError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scan_rejects_non_finite_spot() {
        assert!(scan_chain(&test_chain(), f64::NAN).is_err());
    }
}
