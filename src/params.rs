//! Simulation input parameters

use serde::{Deserialize, Serialize};

use crate::error::SimulationError;

/// Input parameters for one property-vs-alternative simulation
///
/// All rates are annual percentages (4.0 means 4%). The six friction rates
/// at the bottom default to zero when absent from serialized input, matching
/// the "advanced options" of the collection UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Purchase price of the property; also the loan principal
    pub house_price: f64,

    /// Annual loan interest rate (%)
    pub loan_interest: f64,

    /// Loan term in years
    pub loan_term: u32,

    /// Rental income in the first month
    pub monthly_rent: f64,

    /// Annual rent review increase (%)
    pub rental_increase: f64,

    /// Annual depreciation of the structure (%)
    pub depreciation_rate: f64,

    /// Land area, in whatever unit the land price is quoted per
    pub land_area: f64,

    /// Land price per unit area
    pub land_price_per_unit: f64,

    /// Annual land value growth (%)
    pub land_growth_rate: f64,

    /// Annual return of the passive alternative investment (%)
    pub alternative_return: f64,

    /// Annual inflation (%); informational only, the engine does not use it
    pub inflation_rate: f64,

    /// Annual property tax as % of the purchase price
    #[serde(default)]
    pub property_tax_rate: f64,

    /// Annual insurance as % of the purchase price
    #[serde(default)]
    pub insurance_rate: f64,

    /// Management fee as % of collected rent
    #[serde(default)]
    pub management_fee_rate: f64,

    /// Annual maintenance as % of the purchase price
    #[serde(default)]
    pub maintenance_rate: f64,

    /// Share of nominal rent lost to vacancy (%)
    #[serde(default)]
    pub vacancy_rate: f64,

    /// One-time tax on the alternative investment at the horizon (%)
    #[serde(default)]
    pub alt_investment_tax: f64,
}

impl SimulationParameters {
    /// Create a parameter set with the required fields; the six friction
    /// rates start at zero and can be set directly afterwards
    pub fn new(
        house_price: f64,
        loan_interest: f64,
        loan_term: u32,
        monthly_rent: f64,
        rental_increase: f64,
        depreciation_rate: f64,
        land_area: f64,
        land_price_per_unit: f64,
        land_growth_rate: f64,
        alternative_return: f64,
        inflation_rate: f64,
    ) -> Self {
        Self {
            house_price,
            loan_interest,
            loan_term,
            monthly_rent,
            rental_increase,
            depreciation_rate,
            land_area,
            land_price_per_unit,
            land_growth_rate,
            alternative_return,
            inflation_rate,
            property_tax_rate: 0.0,
            insurance_rate: 0.0,
            management_fee_rate: 0.0,
            maintenance_rate: 0.0,
            vacancy_rate: 0.0,
            alt_investment_tax: 0.0,
        }
    }

    /// Current market value of the land component at purchase
    pub fn initial_land_value(&self) -> f64 {
        self.land_area * self.land_price_per_unit
    }

    /// Value of the depreciating structure at purchase (price minus land)
    pub fn initial_structure_value(&self) -> f64 {
        self.house_price - self.initial_land_value()
    }

    /// Number of simulated months
    pub fn total_months(&self) -> u32 {
        self.loan_term * 12
    }

    /// Year a simulation month falls in (both 1-indexed)
    pub fn year(&self, month: u32) -> u32 {
        month.saturating_sub(1) / 12 + 1
    }

    /// Month within its year (1-12)
    pub fn month_in_year(&self, month: u32) -> u32 {
        month.saturating_sub(1) % 12 + 1
    }

    /// Check the parameter set before simulation
    ///
    /// The land decomposition must leave a non-negative structure value,
    /// and the loan must have a positive principal and term.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.house_price <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "house_price",
                value: self.house_price,
            });
        }
        if self.loan_term == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "loan_term",
                value: 0.0,
            });
        }

        let land_value = self.initial_land_value();
        if land_value > self.house_price {
            return Err(SimulationError::LandValueExceedsPrice {
                house_price: self.house_price,
                land_value,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_params() -> SimulationParameters {
        SimulationParameters::new(
            300_000.0, 4.0, 30, 1_500.0, 3.0, 1.0, 2_000.0, 50.0, 3.0, 5.0, 2.0,
        )
    }

    #[test]
    fn test_land_structure_decomposition() {
        let params = base_params();
        assert_eq!(params.initial_land_value(), 100_000.0);
        assert_eq!(params.initial_structure_value(), 200_000.0);
        assert_eq!(params.total_months(), 360);
    }

    #[test]
    fn test_month_to_year_mapping() {
        let params = base_params();
        assert_eq!(params.year(1), 1);
        assert_eq!(params.year(12), 1);
        assert_eq!(params.year(13), 2);
        assert_eq!(params.year(360), 30);
        assert_eq!(params.month_in_year(1), 1);
        assert_eq!(params.month_in_year(12), 12);
        assert_eq!(params.month_in_year(13), 1);
    }

    #[test]
    fn test_validation_rejects_oversized_land() {
        let mut params = base_params();
        params.land_price_per_unit = 200.0; // land alone worth 400k
        let err = params.validate().unwrap_err();
        assert!(matches!(err, SimulationError::LandValueExceedsPrice { .. }));
    }

    #[test]
    fn test_validation_rejects_degenerate_loan() {
        let mut params = base_params();
        params.house_price = 0.0;
        assert!(params.validate().is_err());

        let mut params = base_params();
        params.loan_term = 0;
        assert!(params.validate().is_err());
    }

    #[test]
    fn test_friction_rates_default_to_zero() {
        let json = r#"{
            "house_price": 300000.0,
            "loan_interest": 4.0,
            "loan_term": 30,
            "monthly_rent": 1500.0,
            "rental_increase": 3.0,
            "depreciation_rate": 1.0,
            "land_area": 2000.0,
            "land_price_per_unit": 50.0,
            "land_growth_rate": 3.0,
            "alternative_return": 5.0,
            "inflation_rate": 2.0
        }"#;

        let params: SimulationParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.property_tax_rate, 0.0);
        assert_eq!(params.insurance_rate, 0.0);
        assert_eq!(params.management_fee_rate, 0.0);
        assert_eq!(params.maintenance_rate, 0.0);
        assert_eq!(params.vacancy_rate, 0.0);
        assert_eq!(params.alt_investment_tax, 0.0);
        assert!(params.validate().is_ok());
    }
}
