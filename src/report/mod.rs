//! Report generation from simulation output

mod csv_out;
mod yearly;

pub use csv_out::{write_monthly_csv, write_yearly_csv};
pub use yearly::{yearly_report, YearlyRecord};
