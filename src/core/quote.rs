//! Option chain quotes
//!
//! Per-strike call/put bid and ask quotes, and the column table the scanners
//! read from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{ArbError, ArbResult};

/// Call and put quotes at a single strike
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrikeQuote {
    pub call_bid: f64,
    pub call_ask: f64,
    pub put_bid: f64,
    pub put_ask: f64,
    pub strike: f64,
}

impl StrikeQuote {
    pub fn new(call_bid: f64, call_ask: f64, put_bid: f64, put_ask: f64, strike: f64) -> Self {
        Self {
            call_bid,
            call_ask,
            put_bid,
            put_ask,
            strike,
        }
    }

    /// Are both books uncrossed (bid <= ask)?
    pub fn is_uncrossed(&self) -> bool {
        self.call_bid <= self.call_ask && self.put_bid <= self.put_ask
    }
}

/// Option chain for a single expiry, stored column-wise.
///
/// All five columns always have the same length; the constructors reject
/// anything else, so scans never have to re-check. Strikes are expected in
/// ascending order but this is not enforced (see [`OptionChain::is_strike_ascending`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionChain {
    call_bid: Vec<f64>,
    call_ask: Vec<f64>,
    put_bid: Vec<f64>,
    put_ask: Vec<f64>,
    strike: Vec<f64>,
    /// Snapshot time, when the source provides one
    timestamp: Option<DateTime<Utc>>,
}

impl OptionChain {
    /// Build a chain from its five columns
    pub fn new(
        call_bid: Vec<f64>,
        call_ask: Vec<f64>,
        put_bid: Vec<f64>,
        put_ask: Vec<f64>,
        strike: Vec<f64>,
    ) -> ArbResult<Self> {
        let expected = call_bid.len();
        for (column, values) in [
            ("call_ask", &call_ask),
            ("put_bid", &put_bid),
            ("put_ask", &put_ask),
            ("strike", &strike),
        ] {
            if values.len() != expected {
                return Err(ArbError::LengthMismatch {
                    column,
                    expected,
                    found: values.len(),
                });
            }
        }

        for (column, values) in [
            ("call_bid", &call_bid),
            ("call_ask", &call_ask),
            ("put_bid", &put_bid),
            ("put_ask", &put_ask),
            ("strike", &strike),
        ] {
            if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
                return Err(ArbError::invalid_input(format!(
                    "non-finite {} at row {}",
                    column, idx
                )));
            }
        }

        Ok(Self {
            call_bid,
            call_ask,
            put_bid,
            put_ask,
            strike,
            timestamp: None,
        })
    }

    /// Build a chain from per-strike rows, in the given order
    pub fn from_rows(rows: impl IntoIterator<Item = StrikeQuote>) -> ArbResult<Self> {
        let rows = rows.into_iter();
        let capacity = rows.size_hint().0;
        let mut call_bid = Vec::with_capacity(capacity);
        let mut call_ask = Vec::with_capacity(capacity);
        let mut put_bid = Vec::with_capacity(capacity);
        let mut put_ask = Vec::with_capacity(capacity);
        let mut strike = Vec::with_capacity(capacity);

        for row in rows {
            call_bid.push(row.call_bid);
            call_ask.push(row.call_ask);
            put_bid.push(row.put_bid);
            put_ask.push(row.put_ask);
            strike.push(row.strike);
        }

        Self::new(call_bid, call_ask, put_bid, put_ask, strike)
    }

    /// Attach the snapshot time
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Number of strikes
    pub fn len(&self) -> usize {
        self.strike.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strike.is_empty()
    }

    pub fn timestamp(&self) -> Option<DateTime<Utc>> {
        self.timestamp
    }

    pub fn call_bids(&self) -> &[f64] {
        &self.call_bid
    }

    pub fn call_asks(&self) -> &[f64] {
        &self.call_ask
    }

    pub fn put_bids(&self) -> &[f64] {
        &self.put_bid
    }

    pub fn put_asks(&self) -> &[f64] {
        &self.put_ask
    }

    pub fn strikes(&self) -> &[f64] {
        &self.strike
    }

    /// Quotes at strike index `idx`
    pub fn row(&self, idx: usize) -> Option<StrikeQuote> {
        if idx >= self.len() {
            return None;
        }
        Some(StrikeQuote {
            call_bid: self.call_bid[idx],
            call_ask: self.call_ask[idx],
            put_bid: self.put_bid[idx],
            put_ask: self.put_ask[idx],
            strike: self.strike[idx],
        })
    }

    /// Rows in strike-index order
    pub fn rows(&self) -> impl Iterator<Item = StrikeQuote> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Strikes are non-decreasing
    pub fn is_strike_ascending(&self) -> bool {
        self.strike.windows(2).all(|w| w[0] <= w[1])
    }
}
