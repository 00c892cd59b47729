//! Output collaborators for the computed surface
//!
//! The core hands its result to this layer unchanged; everything about
//! presentation (colour scale, chart layout, number formatting, file
//! formats) is decided here.

pub mod export;
pub mod heatmap;

pub use export::write_grid_csv;
pub use heatmap::render_heatmap;

/// Format a price for display: two decimal places, currency-prefixed.
pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(10.4506), "$10.45");
        assert_eq!(format_price(0.0), "$0.00");
        assert_eq!(format_price(1234.5), "$1234.50");
    }
}
