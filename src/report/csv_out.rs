//! CSV export of simulation series

use std::path::Path;

use super::yearly::YearlyRecord;
use crate::simulation::SimulationResult;

/// Write the full monthly series to a CSV file, one row per month
pub fn write_monthly_csv(path: &Path, result: &SimulationResult) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in &result.monthly {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the yearly comparison report to a CSV file
///
/// The percent-difference column is left empty for years where it is
/// undefined.
pub fn write_yearly_csv(path: &Path, report: &[YearlyRecord]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in report {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
