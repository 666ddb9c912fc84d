//! Error kinds surfaced by one Glauber event
//!
//! Every failure aborts the whole event and is handed back to the caller,
//! which decides whether to log, skip or retry it.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GlauberError {
    /// Degenerate density table, mismatched nucleon radii, invalid run parameters
    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    /// The sampled geometry produced no binary collision
    #[error("No binary collision at impact parameter {impact_parameter} fm")]
    NoCollision { impact_parameter: f64 },

    /// Analysis or dump requested before the entropy field was deposited
    #[error("Entropy density field has not been built")]
    MissingField,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GlauberError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }
}

pub type GlauberResult<T> = Result<T, GlauberError>;
