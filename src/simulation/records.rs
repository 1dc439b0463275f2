//! Output records for the monthly simulation

use serde::{Deserialize, Serialize};

/// One month of simulation output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyRecord {
    /// Simulation month (1-indexed)
    pub month: u32,

    /// Year the month falls in (1-indexed)
    pub year: u32,

    /// Month within its year (1-12)
    pub month_in_year: u32,

    /// Rent collected after vacancy
    pub effective_rent: f64,

    /// Rent minus loan payment and all expenses; may be negative
    pub net_cash_flow: f64,

    /// Running sum of net cash flow through this month
    pub cumulative_cash_flow: f64,

    /// Depreciated structure value
    pub structure_value: f64,

    /// Appreciated land value
    pub land_value: f64,

    /// Structure plus land
    pub total_property_value: f64,

    /// Alternative investment value (exit tax applied to the final month only)
    pub alt_value: f64,
}

/// Complete result of one simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Fixed monthly loan payment
    pub emi: f64,

    /// One record per month, in order
    pub monthly: Vec<MonthlyRecord>,
}

impl SimulationResult {
    /// Monthly net-cash-flow series, the input to the metrics engine
    pub fn net_cash_flows(&self) -> Vec<f64> {
        self.monthly.iter().map(|r| r.net_cash_flow).collect()
    }

    /// Final-horizon summary figures
    pub fn summary(&self) -> SimulationSummary {
        let last = self.monthly.last();

        let final_structure_value = last.map(|r| r.structure_value).unwrap_or(0.0);
        let final_land_value = last.map(|r| r.land_value).unwrap_or(0.0);
        let final_total_property_value = last.map(|r| r.total_property_value).unwrap_or(0.0);
        let final_cumulative_cash_flow = last.map(|r| r.cumulative_cash_flow).unwrap_or(0.0);
        let final_alt_value = last.map(|r| r.alt_value).unwrap_or(0.0);

        SimulationSummary {
            total_months: self.monthly.len() as u32,
            emi: self.emi,
            total_loan_payment: self.emi * self.monthly.len() as f64,
            final_structure_value,
            final_land_value,
            final_total_property_value,
            final_cumulative_cash_flow,
            final_alt_value,
            total_property_benefit: final_total_property_value + final_cumulative_cash_flow,
        }
    }
}

/// Headline figures at the end of the horizon
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_months: u32,
    pub emi: f64,
    /// EMI times the number of payments
    pub total_loan_payment: f64,
    pub final_structure_value: f64,
    pub final_land_value: f64,
    pub final_total_property_value: f64,
    pub final_cumulative_cash_flow: f64,
    /// After the one-time exit tax
    pub final_alt_value: f64,
    /// Final property value plus cumulative rental cash flow
    pub total_property_benefit: f64,
}

impl SimulationSummary {
    /// True when the property path ends ahead of the alternative investment
    pub fn property_wins(&self) -> bool {
        self.total_property_benefit > self.final_alt_value
    }
}
