use std::path::Path;

use anyhow::{Context, Result};

use crate::grid::types::PnlSurface;

/// Write the grid to CSV for tabular inspection: spot values across the
/// header, one row per secondary-axis value.
pub fn write_grid_csv<P: AsRef<Path>>(surface: &PnlSurface, path: P) -> Result<()> {
    let mut writer = csv::Writer::from_path(path.as_ref())
        .with_context(|| format!("failed to create {}", path.as_ref().display()))?;

    let mut header = Vec::with_capacity(surface.spot_axis.len() + 1);
    header.push(format!("{} \\ Spot Price", surface.secondary_label));
    for spot in &surface.spot_axis {
        header.push(format!("{:.4}", spot));
    }
    writer.write_record(&header)?;

    for (i, row) in surface.pnl.iter().enumerate() {
        let mut record = Vec::with_capacity(row.len() + 1);
        record.push(format!("{:.4}", surface.secondary_axis[i]));
        for value in row {
            record.push(format!("{:.6}", value));
        }
        writer.write_record(&record)?;
    }

    writer.flush()?;
    Ok(())
}
