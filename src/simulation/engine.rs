//! Core engine for the monthly property-vs-alternative simulation

use log::debug;

use super::records::{MonthlyRecord, SimulationResult};
use super::state::SimulationState;
use crate::error::SimulationError;
use crate::loan;
use crate::params::SimulationParameters;

/// Monthly simulation engine
///
/// Derives the per-month factors and flat charges from the parameters once,
/// then walks a [`SimulationState`] through one transition per month.
pub struct SimulationEngine {
    params: SimulationParameters,

    /// Fixed monthly loan payment
    emi: f64,

    /// Per-month multiplicative decay of the structure value
    structure_factor: f64,

    /// Per-month multiplicative growth of the land value
    land_factor: f64,

    /// Simple monthly rate of the alternative investment
    monthly_alt_rate: f64,

    // Flat annual charges on the original price, spread over 12 months;
    // never rescaled to the depreciated property value
    property_tax_monthly: f64,
    insurance_monthly: f64,
    maintenance_monthly: f64,
}

impl SimulationEngine {
    /// Validate the parameters and derive the per-month constants
    pub fn new(params: SimulationParameters) -> Result<Self, SimulationError> {
        params.validate()?;

        let emi = loan::monthly_payment(params.house_price, params.loan_interest, params.loan_term);
        let structure_factor = (1.0 - params.depreciation_rate / 100.0).powf(1.0 / 12.0);
        let land_factor = (1.0 + params.land_growth_rate / 100.0).powf(1.0 / 12.0);
        let monthly_alt_rate = params.alternative_return / 100.0 / 12.0;

        let property_tax_monthly = params.property_tax_rate / 100.0 * params.house_price / 12.0;
        let insurance_monthly = params.insurance_rate / 100.0 * params.house_price / 12.0;
        let maintenance_monthly = params.maintenance_rate / 100.0 * params.house_price / 12.0;

        debug!(
            "engine ready: emi={:.2} structure_factor={:.8} land_factor={:.8} alt_rate={:.6}",
            emi, structure_factor, land_factor, monthly_alt_rate
        );

        Ok(Self {
            params,
            emi,
            structure_factor,
            land_factor,
            monthly_alt_rate,
            property_tax_monthly,
            insurance_monthly,
            maintenance_monthly,
        })
    }

    /// Fixed monthly loan payment
    pub fn emi(&self) -> f64 {
        self.emi
    }

    /// Run the full simulation over the loan term
    pub fn run(&self) -> SimulationResult {
        let n = self.params.total_months();
        let mut monthly = Vec::with_capacity(n as usize);
        let mut state = SimulationState::from_params(&self.params);

        for _ in 0..n {
            state.advance_month(self.params.rental_increase);
            monthly.push(self.calculate_month(&mut state));
        }

        // The exit tax is a single realization event at the horizon, not
        // periodic taxation
        if let Some(last) = monthly.last_mut() {
            last.alt_value *= 1.0 - self.params.alt_investment_tax / 100.0;
        }

        SimulationResult {
            emi: self.emi,
            monthly,
        }
    }

    /// One month: collect rent, pay the loan and expenses, move the asset
    /// values, compound the alternative
    fn calculate_month(&self, state: &mut SimulationState) -> MonthlyRecord {
        let effective_rent = state.current_rent * (1.0 - self.params.vacancy_rate / 100.0);
        let management_fee = effective_rent * self.params.management_fee_rate / 100.0;

        let net_cash_flow = effective_rent
            - self.emi
            - self.property_tax_monthly
            - self.insurance_monthly
            - management_fee
            - self.maintenance_monthly;
        state.cumulative_cash_flow += net_cash_flow;

        state.structure_value *= self.structure_factor;
        state.land_value *= self.land_factor;
        state.alt_value *= 1.0 + self.monthly_alt_rate;

        MonthlyRecord {
            month: state.month,
            year: self.params.year(state.month),
            month_in_year: self.params.month_in_year(state.month),
            effective_rent,
            net_cash_flow,
            cumulative_cash_flow: state.cumulative_cash_flow,
            structure_value: state.structure_value,
            land_value: state.land_value,
            total_property_value: state.structure_value + state.land_value,
            alt_value: state.alt_value,
        }
    }
}

/// Validate `params` and run the full monthly simulation
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult, SimulationError> {
    Ok(SimulationEngine::new(params.clone())?.run())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference_params() -> SimulationParameters {
        SimulationParameters::new(
            300_000.0, 4.0, 30, 1_500.0, 3.0, 1.0, 2_000.0, 50.0, 3.0, 5.0, 2.0,
        )
    }

    #[test]
    fn test_reference_scenario_first_month() {
        let result = simulate(&reference_params()).unwrap();

        assert_eq!(result.monthly.len(), 360);
        assert_relative_eq!(result.emi, 1432.25, epsilon = 0.01);

        let first = &result.monthly[0];
        assert_eq!(first.month, 1);
        assert_eq!(first.year, 1);
        assert_eq!(first.effective_rent, 1_500.0);
        assert_relative_eq!(first.net_cash_flow, 1_500.0 - result.emi, epsilon = 1e-9);
        assert_relative_eq!(first.net_cash_flow, 67.75, epsilon = 0.01);
        assert_relative_eq!(first.alt_value, 301_250.0, epsilon = 0.01);
    }

    #[test]
    fn test_structure_decreases_land_increases() {
        let result = simulate(&reference_params()).unwrap();

        for pair in result.monthly.windows(2) {
            assert!(pair[1].structure_value < pair[0].structure_value);
            assert!(pair[1].land_value > pair[0].land_value);
            assert_eq!(
                pair[1].total_property_value,
                pair[1].structure_value + pair[1].land_value
            );
        }
    }

    #[test]
    fn test_cumulative_cash_flow_additive_identity() {
        let result = simulate(&reference_params()).unwrap();

        assert_eq!(
            result.monthly[0].cumulative_cash_flow,
            result.monthly[0].net_cash_flow
        );
        for pair in result.monthly.windows(2) {
            assert_eq!(
                pair[1].cumulative_cash_flow,
                pair[0].cumulative_cash_flow + pair[1].net_cash_flow
            );
        }
    }

    #[test]
    fn test_rent_steps_at_year_boundaries_only() {
        let result = simulate(&reference_params()).unwrap();

        for pair in result.monthly.windows(2) {
            let (prev, curr) = (&pair[0], &pair[1]);
            if curr.month_in_year == 1 {
                assert_relative_eq!(
                    curr.effective_rent,
                    prev.effective_rent * 1.03,
                    epsilon = 1e-9
                );
            } else {
                assert_eq!(curr.effective_rent, prev.effective_rent);
            }
        }
    }

    #[test]
    fn test_exit_tax_applies_to_final_month_only() {
        let mut taxed = reference_params();
        taxed.alt_investment_tax = 20.0;

        let untaxed_result = simulate(&reference_params()).unwrap();
        let taxed_result = simulate(&taxed).unwrap();

        let n = untaxed_result.monthly.len();
        for m in 0..n - 1 {
            assert_eq!(
                taxed_result.monthly[m].alt_value,
                untaxed_result.monthly[m].alt_value
            );
        }
        assert_relative_eq!(
            taxed_result.monthly[n - 1].alt_value,
            untaxed_result.monthly[n - 1].alt_value * 0.8,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_frictions_reduce_cash_flow() {
        let mut params = reference_params();
        params.property_tax_rate = 1.0;
        params.insurance_rate = 0.5;
        params.management_fee_rate = 8.0;
        params.maintenance_rate = 1.0;
        params.vacancy_rate = 5.0;

        let result = simulate(&params).unwrap();
        let first = &result.monthly[0];

        // Effective rent drops by the vacancy share
        assert_relative_eq!(first.effective_rent, 1_500.0 * 0.95, epsilon = 1e-9);

        // 2.5% of the price annually plus 8% of collected rent
        let fixed_monthly = 2.5 / 100.0 * 300_000.0 / 12.0;
        let management = first.effective_rent * 0.08;
        let expected = first.effective_rent - result.emi - fixed_monthly - management;
        assert_relative_eq!(first.net_cash_flow, expected, epsilon = 1e-9);
        assert!(first.net_cash_flow < 0.0);
    }

    #[test]
    fn test_land_exceeding_price_fails_before_simulation() {
        let mut params = reference_params();
        params.land_price_per_unit = 200.0;

        let err = simulate(&params).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::LandValueExceedsPrice { land_value, .. } if land_value == 400_000.0
        ));
    }

    #[test]
    fn test_zero_rates_hold_values_flat() {
        let mut params = reference_params();
        params.depreciation_rate = 0.0;
        params.land_growth_rate = 0.0;
        params.alternative_return = 0.0;
        params.rental_increase = 0.0;

        let result = simulate(&params).unwrap();
        let last = result.monthly.last().unwrap();
        assert_relative_eq!(last.structure_value, 200_000.0, epsilon = 1e-6);
        assert_relative_eq!(last.land_value, 100_000.0, epsilon = 1e-6);
        assert_relative_eq!(last.alt_value, 300_000.0, epsilon = 1e-6);
        assert_eq!(last.effective_rent, 1_500.0);
    }
}
