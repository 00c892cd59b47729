//! P&L grid construction
//!
//! Builds the two sampling axes (spot plus one of volatility/time) and the
//! 10x10 profit-and-loss matrix measured against the unperturbed baseline
//! price.  The matrix layout is fixed: row index follows the secondary
//! axis, column index the spot axis.

pub mod sampler;
pub mod types;

pub use sampler::*;
pub use types::*;
