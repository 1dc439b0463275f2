//! Error types raised during input validation
//!
//! All validation happens before any simulation work starts; once a
//! parameter set passes, every downstream computation is total.

use thiserror::Error;

/// Validation failures for a simulation parameter set
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The land decomposition is invalid: the land alone is worth more than
    /// the whole property, so the structure value would be negative
    #[error(
        "land value ({land_value:.2}) exceeds house price ({house_price:.2}); \
         the structure/land decomposition is invalid"
    )]
    LandValueExceedsPrice { house_price: f64, land_value: f64 },

    /// A parameter is outside its valid domain
    #[error("invalid parameter {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}
