use serde::{Deserialize, Serialize};
use std::fmt;

/// Exercise style of the priced option. Stored lowercase ("call" / "put")
/// in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Immutable bundle of the market inputs driving one computation pass.
///
/// All fields are independent user inputs and no cross-field validation is
/// performed: zero or negative values flow through to the pricer, which
/// answers with its 0.0 fallback for degenerate combinations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketParameters {
    /// Current price of the underlying asset
    #[serde(default = "default_spot_price")]
    pub spot_price: f64,
    /// Price at which the option may be exercised
    #[serde(default = "default_strike_price")]
    pub strike_price: f64,
    /// Time to expiration in years
    #[serde(default = "default_time_to_expiry")]
    pub time_to_expiry: f64,
    /// Annualised volatility (as decimal, e.g. 0.2 for 20%)
    #[serde(default = "default_volatility")]
    pub volatility: f64,
    /// Continuously compounded risk-free rate
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
    /// Call or put
    #[serde(default = "default_option_type")]
    pub option_type: OptionType,
}

impl Default for MarketParameters {
    fn default() -> Self {
        Self {
            spot_price: default_spot_price(),
            strike_price: default_strike_price(),
            time_to_expiry: default_time_to_expiry(),
            volatility: default_volatility(),
            risk_free_rate: default_risk_free_rate(),
            option_type: default_option_type(),
        }
    }
}

fn default_spot_price() -> f64 {
    100.0
}

fn default_strike_price() -> f64 {
    100.0
}

fn default_time_to_expiry() -> f64 {
    1.0
}

fn default_volatility() -> f64 {
    0.2
}

fn default_risk_free_rate() -> f64 {
    0.05
}

fn default_option_type() -> OptionType {
    OptionType::Call
}

/// Selects which parameter varies along the vertical axis of the heatmap.
/// The horizontal axis is always the spot price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapMode {
    /// Volatility on the vertical axis, time to expiry held fixed
    #[default]
    SpotVsVolatility,
    /// Time to expiry on the vertical axis, volatility held fixed
    SpotVsTime,
}

impl HeatmapMode {
    /// Display label for the vertical (secondary) axis.
    pub fn secondary_label(&self) -> &'static str {
        match self {
            HeatmapMode::SpotVsVolatility => "Volatility",
            HeatmapMode::SpotVsTime => "Time to Expiry",
        }
    }
}

impl fmt::Display for HeatmapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeatmapMode::SpotVsVolatility => write!(f, "Spot Price vs Volatility"),
            HeatmapMode::SpotVsTime => write!(f, "Spot Price vs Time"),
        }
    }
}

/// Output of one grid computation pass.
///
/// `pnl[i][j]` is the profit or loss of the position re-priced at
/// `secondary_axis[i]` and `spot_axis[j]`, measured against
/// `baseline_price`. Row order follows the secondary axis, column order the
/// spot axis; any consumer (e.g. a heatmap renderer expecting
/// `z[row][col]` aligned to `y[row]`, `x[col]`) relies on that layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PnlSurface {
    /// Sampled spot prices (ascending, 10 values)
    pub spot_axis: Vec<f64>,
    /// Sampled secondary-parameter values (10 values; descending when the
    /// time axis is reversed)
    pub secondary_axis: Vec<f64>,
    /// P&L per (secondary, spot) pair
    pub pnl: Vec<Vec<f64>>,
    /// Price of the unperturbed position, the cost basis of every cell
    pub baseline_price: f64,
    /// Display label of the secondary axis
    pub secondary_label: &'static str,
}
