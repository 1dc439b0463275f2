//! Fixed-payment loan amortization

/// Fixed monthly payment (EMI) that fully amortizes `principal` over
/// `years` at an annual rate of `annual_rate_pct` percent
///
/// The standard annuity formula `P*i*(1+i)^n / ((1+i)^n - 1)` divides by
/// zero at exactly zero rate, so a zero-rate loan is handled as straight
/// principal recovery `P / n`.
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let n = (years * 12) as i32;
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;

    if monthly_rate == 0.0 {
        return principal / n as f64;
    }

    let growth = (1.0 + monthly_rate).powi(n);
    principal * monthly_rate * growth / (growth - 1.0)
}

/// Remaining loan balance after `months_elapsed` EMI payments
///
/// Walks the balance recursion `b <- b*(1+i) - EMI`. At the final month of
/// the term the balance reaches zero up to floating-point residue, which is
/// the amortization identity the payment formula encodes.
pub fn remaining_balance(
    principal: f64,
    annual_rate_pct: f64,
    years: u32,
    months_elapsed: u32,
) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let emi = monthly_payment(principal, annual_rate_pct, years);

    let mut balance = principal;
    for _ in 0..months_elapsed {
        balance = balance * (1.0 + monthly_rate) - emi;
    }
    balance
}
