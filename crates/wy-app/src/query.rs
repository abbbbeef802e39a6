//! Per-bin result queries.

use wy_results::{extract_column, BinRecord};

use crate::error::AppResult;

/// `(speed, value)` pairs for one per-bin column.
pub fn extract_bin_series(records: &[BinRecord], column: &str) -> AppResult<Vec<(f64, f64)>> {
    Ok(extract_column(records, column)?)
}

/// Render a series as `speed_mps,value` CSV.
pub fn export_csv(series: &[(f64, f64)]) -> String {
    let mut csv = String::from("speed_mps,value\n");
    for (u, val) in series {
        csv.push_str(&format!("{},{}\n", u, val));
    }
    csv
}
