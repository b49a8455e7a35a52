//! CSV option chain loader
//!
//! Reads an exported option chain (calls and puts side by side, one strike per
//! row) into an [`OptionChain`]. Numbers may carry `,` thousands separators;
//! `-` or empty cells mean no quote.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::core::{ArbError, ArbResult, OptionChain, StrikeQuote};

/// Header names of the five columns the scanners need
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainColumns {
    pub call_bid: String,
    pub call_ask: String,
    pub put_bid: String,
    pub put_ask: String,
    pub strike: String,
}

impl ChainColumns {
    /// NSE option chain export: call and put quotes share the `BID`/`ASK`
    /// headers, the put side being the second occurrence (`BID.1`, `ASK.1`)
    pub fn nse() -> Self {
        Self {
            call_bid: "BID".to_string(),
            call_ask: "ASK".to_string(),
            put_bid: "BID.1".to_string(),
            put_ask: "ASK.1".to_string(),
            strike: "STRIKE".to_string(),
        }
    }

    /// Distinct put headers (`BID_P`, `ASK_P`)
    pub fn simple() -> Self {
        Self {
            call_bid: "BID".to_string(),
            call_ask: "ASK".to_string(),
            put_bid: "BID_P".to_string(),
            put_ask: "ASK_P".to_string(),
            strike: "STRIKE".to_string(),
        }
    }

    fn names(&self) -> [&str; 5] {
        [
            self.call_bid.as_str(),
            self.call_ask.as_str(),
            self.put_bid.as_str(),
            self.put_ask.as_str(),
            self.strike.as_str(),
        ]
    }
}

impl Default for ChainColumns {
    fn default() -> Self {
        Self::nse()
    }
}

/// Loader configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoaderConfig {
    /// Column names to read
    pub columns: ChainColumns,
    /// Lines before the header row (e.g. a `CALLS,,PUTS` banner)
    /// Default: 0
    pub skip_rows: usize,
    /// Drop strikes with a missing quote instead of failing
    /// Default: true
    pub skip_incomplete_rows: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            columns: ChainColumns::nse(),
            skip_rows: 0,
            skip_incomplete_rows: true,
        }
    }
}

impl LoaderConfig {
    pub fn with_columns(columns: ChainColumns) -> Self {
        Self {
            columns,
            ..Default::default()
        }
    }
}

/// Load a chain from a CSV file
pub fn load_chain(path: impl AsRef<Path>, config: &LoaderConfig) -> ArbResult<OptionChain> {
    let path = path.as_ref();
    let file = File::open(path)?;
    tracing::info!("Loading option chain from {:?}", path);
    read_chain(file, config)
}

/// Read a chain from any CSV source, keeping row order
pub fn read_chain<R: Read>(reader: R, config: &LoaderConfig) -> ArbResult<OptionChain> {
    let mut records = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_records()
        .skip(config.skip_rows);

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(ArbError::data("CSV has no header row")),
    };
    let headers = dedupe_headers(&header);

    let mut indices = [0usize; 5];
    for (slot, name) in indices.iter_mut().zip(config.columns.names()) {
        *slot = headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| ArbError::MissingColumn(name.to_string()))?;
    }

    let names = config.columns.names();
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for record in records {
        let record = record?;
        // 1-based line in the source, counting banner and header lines
        let line = record.position().map_or(0, |p| p.line() as usize);
        let mut values = [None; 5];
        for (k, &idx) in indices.iter().enumerate() {
            values[k] = parse_cell(record.get(idx).unwrap_or(""), line, names[k])?;
        }

        match values {
            [Some(call_bid), Some(call_ask), Some(put_bid), Some(put_ask), Some(strike)] => {
                let quote = StrikeQuote::new(call_bid, call_ask, put_bid, put_ask, strike);
                if !quote.is_uncrossed() {
                    tracing::warn!(line, strike, "Crossed quotes (bid above ask)");
                }
                rows.push(quote);
            }
            _ if config.skip_incomplete_rows => {
                tracing::debug!(line, "Skipping strike with missing quotes");
                skipped += 1;
            }
            _ => {
                return Err(ArbError::data(format!("line {} has missing quotes", line)));
            }
        }
    }

    tracing::info!(rows = rows.len(), skipped, "Parsed option chain");
    OptionChain::from_rows(rows)
}

/// Suffix repeated header names with `.1`, `.2`, ... in order of appearance
fn dedupe_headers(header: &StringRecord) -> Vec<String> {
    let mut seen: Vec<String> = Vec::with_capacity(header.len());
    let mut out = Vec::with_capacity(header.len());

    for name in header.iter().map(str::trim) {
        let count = seen.iter().filter(|s| s.as_str() == name).count();
        seen.push(name.to_string());
        if count == 0 {
            out.push(name.to_string());
        } else {
            out.push(format!("{}.{}", name, count));
        }
    }

    out
}

/// Parse a quote cell: `None` for a missing quote
fn parse_cell(raw: &str, line: usize, column: &str) -> ArbResult<Option<f64>> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() || cleaned == "-" {
        return Ok(None);
    }

    cleaned
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ArbError::Parse {
            line,
            column: column.to_string(),
            value: raw.to_string(),
        })
}
