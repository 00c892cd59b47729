// Example: scenario_demo.rs
// Loads a scenario TOML (market parameters + heatmap mode), prices the
// option and prints the full P&L grid.  Without an argument the default
// scenario (ATM call, 1y, 20% vol) is used.
//
// Usage:
//     cargo run --example scenario_demo -- <scenario.toml>

use std::env;

use anyhow::Result;
use heatmap_lib::{build_pnl_grid, format_price, price_option, Scenario};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let scenario = if args.len() > 1 {
        Scenario::from_path(&args[1])?
    } else {
        println!("No scenario file given; using the default scenario.");
        Scenario::default()
    };

    println!("Scenario: {}", scenario.mode);
    println!(
        "{} | Spot: {:.2}  Strike: {:.2}  T: {:.2}y  r: {:.1}%  sigma: {:.0}%",
        scenario.params.option_type,
        scenario.params.spot_price,
        scenario.params.strike_price,
        scenario.params.time_to_expiry,
        scenario.params.risk_free_rate * 100.0,
        scenario.params.volatility * 100.0
    );
    println!(
        "Current option price: {}",
        format_price(price_option(&scenario.params))
    );

    let surface = build_pnl_grid(&scenario.params, scenario.mode);

    // Header: spot axis across the top
    print!("{:>12}", surface.secondary_label);
    for spot in &surface.spot_axis {
        print!("{:>10.2}", spot);
    }
    println!();

    for (i, row) in surface.pnl.iter().enumerate() {
        print!("{:>12.4}", surface.secondary_axis[i]);
        for value in row {
            print!("{:>10.4}", value);
        }
        println!();
    }

    Ok(())
}
