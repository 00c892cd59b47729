//! Scenario input for the heatmap pipeline.  A scenario bundles the market
//! parameters with the heatmap mode so that a full computation pass can be
//! described by a single TOML document, e.g.:
//!
//! ```toml
//! mode = "spot_vs_time"
//!
//! [params]
//! spot_price = 95.0
//! volatility = 0.3
//! option_type = "put"
//! ```
//!
//! Missing fields fall back to the standard dashboard defaults
//! (spot 100, strike 100, 1y expiry, 20% vol, 5% rate, call).

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::grid::types::{HeatmapMode, MarketParameters};

/// One self-contained heatmap computation request.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Market inputs driving the computation
    #[serde(default)]
    pub params: MarketParameters,
    /// Which parameter varies along the vertical axis
    #[serde(default)]
    pub mode: HeatmapMode,
}

impl Scenario {
    /// Parse a scenario from a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).context("failed to parse scenario TOML")
    }

    /// Load a scenario from a TOML file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!("failed to read scenario file {}", path.as_ref().display())
        })?;
        Self::from_toml_str(&raw)
    }
}
