//! Sensitivity sweep over one simulation parameter
//!
//! Runs the reference scenario with a single rate swept across a range, in
//! parallel, and writes a CSV comparison of final outcomes.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context};
use clap::Parser;
use serde::Serialize;

use property_invest::{ScenarioRunner, SimulationParameters};

#[derive(Debug, Parser)]
#[command(
    name = "sweep",
    about = "Sweep one rate parameter and compare final outcomes"
)]
struct Cli {
    /// Parameter to sweep: loan-interest, alternative-return,
    /// rental-increase, land-growth, or depreciation
    #[arg(long)]
    parameter: String,

    /// First value of the sweep (%)
    #[arg(long)]
    from: f64,

    /// Last value of the sweep (%)
    #[arg(long)]
    to: f64,

    /// Number of sweep points
    #[arg(long, default_value_t = 11)]
    steps: usize,

    /// Output CSV path
    #[arg(long, default_value = "sweep.csv")]
    output: PathBuf,
}

/// One line of the sweep comparison
#[derive(Serialize)]
struct SweepRow {
    value: f64,
    emi: f64,
    total_property_benefit: f64,
    final_alt_value: f64,
    difference: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    if cli.steps == 0 {
        bail!("steps must be at least 1");
    }

    let apply: fn(&mut SimulationParameters, f64) = match cli.parameter.as_str() {
        "loan-interest" => |p, v| p.loan_interest = v,
        "alternative-return" => |p, v| p.alternative_return = v,
        "rental-increase" => |p, v| p.rental_increase = v,
        "land-growth" => |p, v| p.land_growth_rate = v,
        "depreciation" => |p, v| p.depreciation_rate = v,
        other => bail!("unknown sweep parameter: {}", other),
    };

    let step = if cli.steps > 1 {
        (cli.to - cli.from) / (cli.steps - 1) as f64
    } else {
        0.0
    };
    let values: Vec<f64> = (0..cli.steps).map(|k| cli.from + step * k as f64).collect();

    // Reference scenario as the sweep base
    let base = SimulationParameters::new(
        300_000.0, 4.0, 30, 1_500.0, 3.0, 1.0, 2_000.0, 50.0, 3.0, 5.0, 2.0,
    );
    let runner = ScenarioRunner::new(base);

    let start = Instant::now();
    let swept = runner.sweep(&values, apply);
    println!("{} scenarios in {:?}", swept.len(), start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("creating {}", cli.output.display()))?;

    for (value, result) in swept {
        let result =
            result.with_context(|| format!("scenario {}={} failed", cli.parameter, value))?;
        let summary = result.summary();
        writer.serialize(SweepRow {
            value,
            emi: summary.emi,
            total_property_benefit: summary.total_property_benefit,
            final_alt_value: summary.final_alt_value,
            difference: summary.total_property_benefit - summary.final_alt_value,
        })?;
    }
    writer.flush()?;

    println!("Sweep written to: {}", cli.output.display());
    Ok(())
}
