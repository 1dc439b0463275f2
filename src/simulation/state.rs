//! Running state threaded through the monthly simulation

use crate::params::SimulationParameters;

/// Mutable values carried from month to month
///
/// Only the path-dependent quantities live here; the closed-form factors and
/// flat monthly charges belong to the engine.
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Month most recently advanced to (1-indexed; 0 before the first month)
    pub month: u32,

    /// Nominal rent before vacancy, after any annual reviews so far
    pub current_rent: f64,

    /// Depreciating structure value
    pub structure_value: f64,

    /// Appreciating land value
    pub land_value: f64,

    /// Compounding alternative investment value
    pub alt_value: f64,

    /// Running sum of net cash flow
    pub cumulative_cash_flow: f64,
}

impl SimulationState {
    /// Initial state at purchase: the property decomposes into structure
    /// plus land, and the alternative path starts with the same capital
    /// outlay as the house price
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self {
            month: 0,
            current_rent: params.monthly_rent,
            structure_value: params.initial_structure_value(),
            land_value: params.initial_land_value(),
            alt_value: params.house_price,
            cumulative_cash_flow: 0.0,
        }
    }

    /// Advance to the next month, applying the annual rent review when a
    /// new year starts (months 13, 25, 37, ...)
    pub fn advance_month(&mut self, rental_increase_pct: f64) {
        self.month += 1;
        if self.month > 1 && (self.month - 1) % 12 == 0 {
            self.current_rent *= 1.0 + rental_increase_pct / 100.0;
        }
    }
}
