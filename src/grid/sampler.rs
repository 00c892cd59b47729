use crate::grid::types::{HeatmapMode, MarketParameters, PnlSurface};
use crate::models::bs::bs_price;

/// Number of samples along each axis of the P&L grid.
pub const GRID_STEPS: usize = 10;

/// Fractional half-width of the spot axis around the input spot price
/// (0.2 = the axis spans spot * 0.8 to spot * 1.2).
const SPOT_SPAN: f64 = 0.2;

/// Fractional half-width of the volatility axis around the input
/// volatility (0.5 = the axis spans vol * 0.5 to vol * 1.5).
const VOL_SPAN: f64 = 0.5;

/// Lower bound of the time axis in years.  Hardcoded: expiries at or below
/// this value produce a degenerate or reversed axis.
const TIME_AXIS_FLOOR: f64 = 0.1;

/// `n` evenly spaced values from `lo` to `hi`, endpoints included.
///
/// The interpolation formula is applied unconditionally, so a reversed
/// range (`lo > hi`) yields a descending sequence and an empty range yields
/// `n` copies of `lo`.
pub fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    if n <= 1 {
        return vec![lo; n];
    }
    let step = (hi - lo) / (n - 1) as f64;
    (0..n).map(|i| lo + step * i as f64).collect()
}

/// Build the sampling axes and the 10x10 P&L matrix for `mode`.
///
/// The unperturbed parameters are priced once to obtain the baseline
/// (cost-basis) price; each cell then holds the re-priced scenario minus
/// that baseline.  Row index follows the secondary axis, column index the
/// spot axis.
///
/// Under [`HeatmapMode::SpotVsTime`] the time axis always starts at 0.1
/// years, so an input expiry at or below 0.1 makes the axis degenerate or
/// reversed.  The grid is still built over the axis as produced; a warning
/// is printed but the values are not altered.
pub fn build_pnl_grid(params: &MarketParameters, mode: HeatmapMode) -> PnlSurface {
    let baseline_price = bs_price(
        params.option_type,
        params.spot_price,
        params.strike_price,
        params.time_to_expiry,
        params.risk_free_rate,
        params.volatility,
    );

    let spot_axis = linspace(
        params.spot_price * (1.0 - SPOT_SPAN),
        params.spot_price * (1.0 + SPOT_SPAN),
        GRID_STEPS,
    );

    let secondary_axis = match mode {
        HeatmapMode::SpotVsVolatility => linspace(
            params.volatility * (1.0 - VOL_SPAN),
            params.volatility * (1.0 + VOL_SPAN),
            GRID_STEPS,
        ),
        HeatmapMode::SpotVsTime => {
            if params.time_to_expiry <= TIME_AXIS_FLOOR {
                eprintln!(
                    "Warning: time to expiry {:.4}y is at or below the {:.1}y time-axis floor; the axis will be degenerate or reversed.",
                    params.time_to_expiry, TIME_AXIS_FLOOR
                );
            }
            linspace(TIME_AXIS_FLOOR, params.time_to_expiry, GRID_STEPS)
        }
    };

    let mut pnl = vec![vec![0.0; GRID_STEPS]; GRID_STEPS];
    for (i, &secondary) in secondary_axis.iter().enumerate() {
        for (j, &sim_spot) in spot_axis.iter().enumerate() {
            let (sim_time, sim_vol) = match mode {
                HeatmapMode::SpotVsVolatility => (params.time_to_expiry, secondary),
                HeatmapMode::SpotVsTime => (secondary, params.volatility),
            };
            let sim_price = bs_price(
                params.option_type,
                sim_spot,
                params.strike_price,
                sim_time,
                params.risk_free_rate,
                sim_vol,
            );
            pnl[i][j] = sim_price - baseline_price;
        }
    }

    PnlSurface {
        spot_axis,
        secondary_axis,
        pnl,
        baseline_price,
        secondary_label: mode.secondary_label(),
    }
}
