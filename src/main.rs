//! Property Invest CLI
//!
//! Runs one property-vs-alternative simulation and prints the summary
//! report, the yearly comparison table, and NPV/IRR of the rental cash
//! flows. Supports JSON output and CSV export of the monthly series.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use property_invest::report::{write_monthly_csv, yearly_report, YearlyRecord};
use property_invest::simulation::SimulationSummary;
use property_invest::{simulate, FinancialMetrics, SimulationParameters};

#[derive(Debug, Parser)]
#[command(
    name = "property_invest",
    about = "Compare a leveraged rental-property purchase against a passive investment"
)]
struct Cli {
    /// Purchase price of the house; also the loan principal
    #[arg(long, default_value_t = 300_000.0)]
    house_price: f64,

    /// Annual loan interest rate (%)
    #[arg(long, default_value_t = 4.0)]
    loan_interest: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 30)]
    loan_term: u32,

    /// Initial monthly rental income
    #[arg(long, default_value_t = 1_500.0)]
    monthly_rent: f64,

    /// Annual rental increase (%)
    #[arg(long, default_value_t = 3.0)]
    rental_increase: f64,

    /// Annual structure depreciation (%)
    #[arg(long, default_value_t = 1.0)]
    depreciation_rate: f64,

    /// Land area (sq ft)
    #[arg(long, default_value_t = 2_000.0)]
    land_area: f64,

    /// Land price per sq ft
    #[arg(long, default_value_t = 50.0)]
    land_price_per_unit: f64,

    /// Annual land growth rate (%)
    #[arg(long, default_value_t = 3.0)]
    land_growth_rate: f64,

    /// Alternative investment return rate (%)
    #[arg(long, default_value_t = 5.0)]
    alternative_return: f64,

    /// Inflation rate (%), informational only
    #[arg(long, default_value_t = 2.0)]
    inflation_rate: f64,

    /// Discount rate for the NPV calculation (%)
    #[arg(long, default_value_t = 5.0)]
    discount_rate: f64,

    /// Annual property tax rate (%)
    #[arg(long, default_value_t = 0.0)]
    property_tax_rate: f64,

    /// Annual insurance rate (%)
    #[arg(long, default_value_t = 0.0)]
    insurance_rate: f64,

    /// Management fee rate (%) on collected rent
    #[arg(long, default_value_t = 0.0)]
    management_fee_rate: f64,

    /// Annual maintenance rate (%) of the house price
    #[arg(long, default_value_t = 0.0)]
    maintenance_rate: f64,

    /// Vacancy rate (%)
    #[arg(long, default_value_t = 0.0)]
    vacancy_rate: f64,

    /// One-time alternative-investment exit tax (%)
    #[arg(long, default_value_t = 0.0)]
    alt_investment_tax: f64,

    /// Load all simulation parameters from a JSON file instead of the flags
    #[arg(long)]
    params: Option<PathBuf>,

    /// Print the full report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Write the monthly series to this CSV file
    #[arg(long)]
    csv: Option<PathBuf>,
}

impl Cli {
    fn to_params(&self) -> anyhow::Result<SimulationParameters> {
        if let Some(path) = &self.params {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading parameters from {}", path.display()))?;
            return serde_json::from_str(&contents)
                .with_context(|| format!("parsing parameters from {}", path.display()));
        }

        let mut params = SimulationParameters::new(
            self.house_price,
            self.loan_interest,
            self.loan_term,
            self.monthly_rent,
            self.rental_increase,
            self.depreciation_rate,
            self.land_area,
            self.land_price_per_unit,
            self.land_growth_rate,
            self.alternative_return,
            self.inflation_rate,
        );
        params.property_tax_rate = self.property_tax_rate;
        params.insurance_rate = self.insurance_rate;
        params.management_fee_rate = self.management_fee_rate;
        params.maintenance_rate = self.maintenance_rate;
        params.vacancy_rate = self.vacancy_rate;
        params.alt_investment_tax = self.alt_investment_tax;
        Ok(params)
    }
}

/// Full report payload for `--json`
#[derive(Serialize)]
struct Report {
    summary: SimulationSummary,
    property_wins: bool,
    discount_rate_pct: f64,
    npv: f64,
    irr_annual: Option<f64>,
    yearly: Vec<YearlyRecord>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let params = cli.to_params()?;

    let result = simulate(&params).context("simulation failed")?;
    let yearly = yearly_report(&result, params.loan_term);
    let metrics = FinancialMetrics::calculate(&result.net_cash_flows(), cli.discount_rate);
    let summary = result.summary();

    if let Some(path) = &cli.csv {
        write_monthly_csv(path, &result)
            .with_context(|| format!("writing monthly series to {}", path.display()))?;
    }

    if cli.json {
        let report = Report {
            property_wins: summary.property_wins(),
            summary,
            discount_rate_pct: cli.discount_rate,
            npv: metrics.npv,
            irr_annual: metrics.irr,
            yearly,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&params, &summary, &metrics, cli.discount_rate, &yearly);
    if let Some(path) = &cli.csv {
        println!("\nMonthly series written to: {}", path.display());
    }

    Ok(())
}

fn print_report(
    params: &SimulationParameters,
    summary: &SimulationSummary,
    metrics: &FinancialMetrics,
    discount_rate: f64,
    yearly: &[YearlyRecord],
) {
    println!("Property Investment Analysis");
    println!("============================\n");

    println!("Monthly EMI: ${:.2}", summary.emi);
    println!(
        "Total payment over {} years: ${:.2}",
        params.loan_term, summary.total_loan_payment
    );
    println!();
    println!("Final structure value:        ${:.2}", summary.final_structure_value);
    println!("Final land value:             ${:.2}", summary.final_land_value);
    println!("Final total property value:   ${:.2}", summary.final_total_property_value);
    println!("Cumulative cash flow:         ${:.2}", summary.final_cumulative_cash_flow);
    println!("Total property benefit:       ${:.2}", summary.total_property_benefit);
    println!("Alternative value after tax:  ${:.2}", summary.final_alt_value);
    println!();

    if summary.property_wins() {
        println!("Verdict: buying the house appears to be the better investment.");
    } else {
        println!("Verdict: investing the money elsewhere appears to be the better option.");
    }
    println!();

    println!(
        "NPV of cash flows ({}% discount rate): ${:.2}",
        discount_rate, metrics.npv
    );
    match metrics.irr {
        Some(irr) => println!("IRR (annualized): {:.2}%", irr * 100.0),
        None => println!("IRR could not be calculated."),
    }

    println!("\nYearly comparison:");
    println!(
        "{:>4} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13} {:>13} {:>9}",
        "Year",
        "Structure",
        "Land",
        "Property",
        "Cash Flow",
        "Alternative",
        "Benefit",
        "Difference",
        "% Diff"
    );
    println!("{}", "-".repeat(112));

    for row in yearly {
        let pct = match row.percent_difference {
            Some(p) => format!("{:.2}%", p),
            None => "n/a".to_string(),
        };
        println!(
            "{:>4} {:>13.2} {:>13.2} {:>13.2} {:>13.2} {:>13.2} {:>13.2} {:>13.2} {:>9}",
            row.year,
            row.structure_value,
            row.land_value,
            row.total_property_value,
            row.cumulative_cash_flow,
            row.alt_value,
            row.total_property_benefit,
            row.difference,
            pct
        );
    }
}
