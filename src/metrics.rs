//! Net present value and internal rate of return over monthly cash flows

use serde::{Deserialize, Serialize};

/// Convergence tolerance on the monthly rate
const IRR_TOLERANCE: f64 = 1e-9;

/// Iteration cap for both Newton-Raphson and the bisection fallback
const IRR_MAX_ITERATIONS: u32 = 200;

/// Monthly-rate search bracket: -99% to +1000% per period
const IRR_RATE_MIN: f64 = -0.99;
const IRR_RATE_MAX: f64 = 10.0;

/// NPV and (optional) IRR derived from a monthly net-cash-flow series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialMetrics {
    /// Present value of the series at the given annual discount rate
    pub npv: f64,

    /// Annualized internal rate of return; `None` when the series admits no
    /// convergent solution
    pub irr: Option<f64>,
}

impl FinancialMetrics {
    /// Compute both metrics for a monthly series
    pub fn calculate(cash_flows: &[f64], annual_discount_rate_pct: f64) -> Self {
        Self {
            npv: npv(cash_flows, annual_discount_rate_pct),
            irr: irr(cash_flows),
        }
    }
}

/// Net present value of a monthly series at an annual discount rate given
/// in percent
///
/// Month m (1-indexed) is discounted by `(1 + d/100/12)^m`.
pub fn npv(cash_flows: &[f64], annual_discount_rate_pct: f64) -> f64 {
    let monthly_rate = annual_discount_rate_pct / 100.0 / 12.0;
    cash_flows
        .iter()
        .enumerate()
        .map(|(m, &cf)| cf / (1.0 + monthly_rate).powi(m as i32 + 1))
        .sum()
}

/// Annualized internal rate of return of a monthly series
///
/// Finds the monthly rate at which the present value of the series is zero
/// and reports `(1 + i)^12 - 1`. Returns `None` when the series has no sign
/// change (no root can exist) or the search fails to converge within the
/// iteration cap.
pub fn irr(cash_flows: &[f64]) -> Option<f64> {
    let monthly = monthly_irr(cash_flows)?;
    Some((1.0 + monthly).powi(12) - 1.0)
}

/// Monthly root of the present-value polynomial
///
/// Newton-Raphson from a small positive guess; bisection over the full
/// bracket when the derivative degenerates, the value goes non-finite near
/// the bracket edge, or the iteration fails to settle.
fn monthly_irr(cash_flows: &[f64]) -> Option<f64> {
    let has_inflow = cash_flows.iter().any(|&cf| cf > 0.0);
    let has_outflow = cash_flows.iter().any(|&cf| cf < 0.0);
    if !has_inflow || !has_outflow {
        return None;
    }

    let mut rate = 0.005;
    for _ in 0..IRR_MAX_ITERATIONS {
        let (pv, slope) = present_value_and_slope(cash_flows, rate);
        if !pv.is_finite() || slope.abs() < 1e-14 {
            break;
        }

        let next = (rate - pv / slope).clamp(IRR_RATE_MIN, IRR_RATE_MAX);
        if (next - rate).abs() < IRR_TOLERANCE {
            return Some(next);
        }
        rate = next;
    }

    bisect_irr(cash_flows)
}

/// Present value of the series at a monthly rate, first flow at exponent 0
///
/// Zero flows are skipped so deep discounting near the bracket edge cannot
/// produce 0/0.
fn present_value(cash_flows: &[f64], rate: f64) -> f64 {
    cash_flows
        .iter()
        .enumerate()
        .filter(|&(_, &cf)| cf != 0.0)
        .map(|(t, &cf)| cf / (1.0 + rate).powi(t as i32))
        .sum()
}

/// Present value and its derivative with respect to the monthly rate
fn present_value_and_slope(cash_flows: &[f64], rate: f64) -> (f64, f64) {
    let mut pv = 0.0;
    let mut slope = 0.0;

    for (t, &cf) in cash_flows.iter().enumerate() {
        if cf == 0.0 {
            continue;
        }
        pv += cf / (1.0 + rate).powi(t as i32);
        if t > 0 {
            slope -= t as f64 * cf / (1.0 + rate).powi(t as i32 + 1);
        }
    }

    (pv, slope)
}

/// Bisection fallback over the full rate bracket
fn bisect_irr(cash_flows: &[f64]) -> Option<f64> {
    let mut low = IRR_RATE_MIN;
    let mut high = IRR_RATE_MAX;
    let mut pv_low = present_value(cash_flows, low);
    let pv_high = present_value(cash_flows, high);

    // A strict sign change across the bracket is required; non-finite
    // endpoint values fail this test as well
    if !(pv_low * pv_high < 0.0) {
        return None;
    }

    for _ in 0..IRR_MAX_ITERATIONS {
        let mid = (low + high) / 2.0;
        let pv_mid = present_value(cash_flows, mid);

        if pv_mid.abs() < IRR_TOLERANCE || (high - low) / 2.0 < IRR_TOLERANCE {
            return Some(mid);
        }

        if pv_low * pv_mid < 0.0 {
            high = mid;
        } else {
            low = mid;
            pv_low = pv_mid;
        }
    }

    None
}
