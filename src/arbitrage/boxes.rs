//! Box spread search
//!
//! One ascending pass. The first reversal seeds the lower (long box) leg;
//! every later strike is first tried as the conversion leg against the
//! current reversal, then checked for a cheaper reversal that replaces it.
//! Conversions are only paired with the best reversal seen so far, never with
//! every earlier reversal, and strikes at or before the seeding strike are
//! never tried as conversions.

use crate::core::{OptionChain, StrikeQuote};

use super::{is_conversion, is_reversal, parity_delta, BoxSpread};

/// Reversal leg the box is anchored to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReversalLeg {
    /// call ask - put bid
    pub cost: f64,
    pub strike: f64,
    /// Unrounded parity delta; more negative is better
    pub minimize: f64,
}

impl ReversalLeg {
    /// Reversal leg at this strike, if one is available
    pub fn at(quote: &StrikeQuote, underlying: f64) -> Option<Self> {
        if !is_reversal(quote.call_ask, quote.put_bid, underlying, quote.strike) {
            return None;
        }
        Some(Self {
            cost: quote.call_ask - quote.put_bid,
            strike: quote.strike,
            minimize: parity_delta(quote.call_ask, quote.put_bid, underlying, quote.strike),
        })
    }

    /// Close the box with a conversion at `quote`
    pub fn pair_with(&self, quote: &StrikeQuote) -> BoxSpread {
        let credit = quote.put_ask - quote.call_bid;
        let wide = quote.strike - self.strike;
        let cost = self.cost + credit;

        BoxSpread {
            lower_strike: self.strike,
            upper_strike: quote.strike,
            theo: wide,
            cost,
            net: wide - cost,
        }
    }
}

/// Running state of the box search
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoxSearch {
    pub reversal: Option<ReversalLeg>,
    pub best: Option<BoxSpread>,
}

impl BoxSearch {
    /// Advance the search by one strike
    pub fn step(mut self, quote: &StrikeQuote, underlying: f64) -> Self {
        let Some(leg) = self.reversal else {
            self.reversal = ReversalLeg::at(quote, underlying);
            return self;
        };

        if is_conversion(quote.call_bid, quote.put_ask, underlying, quote.strike) {
            let candidate = leg.pair_with(quote);
            if self.best.map_or(true, |best| candidate.net > best.net) {
                self.best = Some(candidate);
            }
        }

        if let Some(cheaper) = ReversalLeg::at(quote, underlying) {
            if cheaper.minimize < leg.minimize {
                tracing::trace!(
                    from = leg.strike,
                    to = cheaper.strike,
                    "Re-anchoring box on cheaper reversal"
                );
                self.reversal = Some(cheaper);
            }
        }

        self
    }
}

/// Most profitable box spread: reversal at a lower strike, conversion at a
/// higher one. `None` unless both legs are found.
pub fn find_best_box_spread(chain: &OptionChain, underlying: f64) -> Option<BoxSpread> {
    chain
        .rows()
        .fold(BoxSearch::default(), |search, quote| {
            search.step(&quote, underlying)
        })
        .best
}
