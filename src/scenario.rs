//! Batch scenario runner for sensitivity analysis
//!
//! Each simulation run is a pure function of its parameters, so scenario
//! batches parallelize with no shared state.

use log::info;
use rayon::prelude::*;

use crate::error::SimulationError;
use crate::params::SimulationParameters;
use crate::simulation::{simulate, SimulationResult};

/// Runs families of related simulations from a base parameter set
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base: SimulationParameters,
}

impl ScenarioRunner {
    pub fn new(base: SimulationParameters) -> Self {
        Self { base }
    }

    /// Base parameters for inspection
    pub fn base(&self) -> &SimulationParameters {
        &self.base
    }

    /// Run the unmodified base scenario
    pub fn run(&self) -> Result<SimulationResult, SimulationError> {
        simulate(&self.base)
    }

    /// Run many independent parameter sets in parallel
    pub fn run_batch(
        scenarios: &[SimulationParameters],
    ) -> Vec<Result<SimulationResult, SimulationError>> {
        info!("running {} scenarios in parallel", scenarios.len());
        scenarios.par_iter().map(simulate).collect()
    }

    /// Sweep one knob across `values`
    ///
    /// Each value is applied to a copy of the base by `apply` and the runs
    /// execute in parallel; results come back in input order.
    pub fn sweep<F>(
        &self,
        values: &[f64],
        apply: F,
    ) -> Vec<(f64, Result<SimulationResult, SimulationError>)>
    where
        F: Fn(&mut SimulationParameters, f64) + Sync,
    {
        values
            .par_iter()
            .map(|&value| {
                let mut params = self.base.clone();
                apply(&mut params, value);
                (value, simulate(&params))
            })
            .collect()
    }
}
