//! Configuration for chain scans

use serde::{Deserialize, Serialize};

/// Configuration for [`ChainScanner`](super::ChainScanner)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Log a warning when strikes are not in ascending order.
    /// Box spread widths are only meaningful on ascending chains.
    /// Default: true
    pub warn_on_unsorted_strikes: bool,

    /// Refuse to scan a chain whose strikes are not ascending.
    /// Default: false
    pub reject_unsorted_strikes: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            warn_on_unsorted_strikes: true,
            reject_unsorted_strikes: false,
        }
    }
}

impl ScanConfig {
    /// Strict settings: unsorted chains are an error
    pub fn strict() -> Self {
        Self {
            reject_unsorted_strikes: true,
            ..Default::default()
        }
    }

    /// Quiet settings: scan whatever order is given without logging
    pub fn permissive() -> Self {
        Self {
            warn_on_unsorted_strikes: false,
            reject_unsorted_strikes: false,
        }
    }
}
