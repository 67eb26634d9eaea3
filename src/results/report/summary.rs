//! Log summary of a batch.

use super::Generator;
use crate::{
    config::Config,
    results::{BatchReport, Family},
};
use colored::Colorize;
use failure::Error;

/// Generator that logs the summary of a batch.
#[derive(Debug, Default)]
pub struct Summary;

impl Summary {
    /// Creates a new summary generator.
    pub fn new() -> Self {
        Summary
    }
}

impl Generator for Summary {
    fn generate(&mut self, config: &Config, report: &BatchReport) -> Result<(), Error> {
        info!("Summary of `{}`:", report.directory().display());
        for task in report.tasks() {
            let families = task
                .task()
                .families()
                .iter()
                .map(Family::to_string)
                .collect::<Vec<_>>()
                .join(" and ");
            if let Some(failure) = task.failure() {
                error!("the {} extraction did not finish: {}", families, failure);
                continue;
            }

            let skipped = task.skipped().count();
            info!(
                "{} extraction: {} feature files written, {} skipped.",
                families,
                format!("{}", task.extracted()).bold(),
                if skipped > 0 {
                    format!("{}", skipped).bold().yellow()
                } else {
                    format!("{}", skipped).bold()
                }
            );
            if config.is_verbose() {
                for outcome in task.skipped() {
                    debug!(
                        "{} of {} skipped: {:?}",
                        outcome.family(),
                        outcome.application(),
                        outcome.status()
                    );
                }
            }
        }

        for dataset in report.datasets() {
            info!(
                "{} dataset with {} applications written to `{}`.",
                dataset.family(),
                dataset.rows(),
                dataset.path().display()
            );
        }

        Ok(())
    }
}
