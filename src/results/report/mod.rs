//! Report generation module.

mod json;
mod summary;

pub use self::{json::Json, summary::Summary};
use crate::{config::Config, results::BatchReport};
use failure::Error;

/// Trait that represents a type that can generate a report.
pub trait Generator {
    /// Generates an actual report.
    fn generate(&mut self, config: &Config, report: &BatchReport) -> Result<(), Error>;
}
