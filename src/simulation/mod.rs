//! Monthly simulation of property cash flows and asset values

mod engine;
mod records;
mod state;

pub use engine::{simulate, SimulationEngine};
pub use records::{MonthlyRecord, SimulationResult, SimulationSummary};
pub use state::SimulationState;
