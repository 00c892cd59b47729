// Example: heatmap_demo.rs
// Prices a sample at-the-money call and builds the P&L grid in both modes,
// writing an SVG heatmap and a CSV dump of each grid to the working
// directory.
//
// Usage:
//     cargo run --example heatmap_demo

use anyhow::Result;
use heatmap_lib::{
    build_pnl_grid, format_price, price_option, render_heatmap, write_grid_csv, HeatmapMode,
    MarketParameters, OptionType,
};

fn main() -> Result<()> {
    println!("Option P&L Heatmap Demo");
    println!("=======================");

    let params = MarketParameters {
        spot_price: 100.0,
        strike_price: 100.0,
        time_to_expiry: 1.0,
        volatility: 0.2,
        risk_free_rate: 0.05,
        option_type: OptionType::Call,
    };

    println!(
        "{} | Spot: {:.2}  Strike: {:.2}  T: {:.2}y  r: {:.1}%  sigma: {:.0}%",
        params.option_type,
        params.spot_price,
        params.strike_price,
        params.time_to_expiry,
        params.risk_free_rate * 100.0,
        params.volatility * 100.0
    );

    let baseline = price_option(&params);
    println!("Current option price: {}", format_price(baseline));

    for mode in [HeatmapMode::SpotVsVolatility, HeatmapMode::SpotVsTime] {
        println!("\nMode: {}", mode);

        let surface = build_pnl_grid(&params, mode);

        // Print the grid corners so the output stays readable
        println!(
            "{:<16} {:<12} {:<12}",
            surface.secondary_label, "P&L @ low spot", "P&L @ high spot"
        );
        println!("{}", "-".repeat(44));
        for (i, row) in surface.pnl.iter().enumerate() {
            println!(
                "{:<16.4} {:<12.4} {:<12.4}",
                surface.secondary_axis[i],
                row[0],
                row[row.len() - 1]
            );
        }

        let (svg_path, csv_path) = match mode {
            HeatmapMode::SpotVsVolatility => ("pnl_spot_vol.svg", "pnl_spot_vol.csv"),
            HeatmapMode::SpotVsTime => ("pnl_spot_time.svg", "pnl_spot_time.csv"),
        };
        render_heatmap(&surface, svg_path)?;
        write_grid_csv(&surface, csv_path)?;
        println!("Chart saved to {}", svg_path);
        println!("Grid saved to {}", csv_path);
    }

    Ok(())
}
