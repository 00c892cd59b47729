//! # Heatmap-Lib: Black-Scholes Pricing and P&L Heatmap Construction
//!
//! `heatmap-lib` is a small Rust library for exploring the profit-and-loss
//! profile of a European option position.  Given five market parameters and
//! an option type it computes one theoretical Black-Scholes price, then
//! samples a 10x10 sensitivity grid over perturbed inputs (spot on one axis,
//! volatility or time on the other) measured against that baseline price.
//!
//! ## Core Features
//!
//! - **Black-Scholes Pricing**: closed-form European call/put valuation with
//!   a documented 0.0 fallback for degenerate inputs
//! - **P&L Grid Sampling**: spot axis at +/-20% around the input spot,
//!   secondary axis over volatility (x0.5 to x1.5) or time (0.1y to expiry)
//! - **Rendering**: SVG heatmap output with a diverging red/green colour
//!   scale, plus CSV export of the raw grid
//! - **Scenario Input**: the full computation request as a single TOML
//!   document with dashboard-style field defaults
//!
//! ## Quick Start
//!
//! ```rust
//! use heatmap_lib::{build_pnl_grid, HeatmapMode, MarketParameters, OptionType};
//!
//! let params = MarketParameters {
//!     spot_price: 100.0,
//!     strike_price: 100.0,
//!     time_to_expiry: 1.0,
//!     volatility: 0.2,
//!     risk_free_rate: 0.05,
//!     option_type: OptionType::Call,
//! };
//!
//! let surface = build_pnl_grid(&params, HeatmapMode::SpotVsVolatility);
//!
//! assert_eq!(surface.pnl.len(), 10);
//! assert_eq!(surface.spot_axis.len(), 10);
//! // Baseline is the standard reference value for these inputs
//! assert!((surface.baseline_price - 10.4506).abs() < 5e-3);
//! ```
//!
//! The computation is fully synchronous and idempotent: identical inputs
//! always yield identical outputs, and nothing is cached between calls.

// ================================================================================================
// MODULES
// ================================================================================================

pub mod grid;
pub mod models;
pub mod render;
pub mod scenario;

// ================================================================================================
// PUBLIC RE-EXPORTS
// ================================================================================================

// Grid construction and the data model
pub use grid::sampler::{build_pnl_grid, linspace, GRID_STEPS};
pub use grid::types::{HeatmapMode, MarketParameters, OptionType, PnlSurface};

// Pricing helpers
pub use models::bs::{bs_call_price, bs_price, bs_put_price, FALLBACK_PRICE};

// Output collaborators
pub use render::{format_price, render_heatmap, write_grid_csv};

// Scenario input
pub use scenario::Scenario;

/// Price an option from a bundled parameter set.
///
/// Thin convenience wrapper over [`bs_price`] for callers that already hold
/// a [`MarketParameters`] value; this is also the baseline price every grid
/// cell is measured against.
pub fn price_option(params: &MarketParameters) -> f64 {
    models::bs::bs_price(
        params.option_type,
        params.spot_price,
        params.strike_price,
        params.time_to_expiry,
        params.risk_free_rate,
        params.volatility,
    )
}
