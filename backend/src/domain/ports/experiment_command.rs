//! Driving port for experiment writes.

use async_trait::async_trait;

use crate::domain::{Error, ExperimentId, UserId};

use super::ExperimentView;

/// Domain use-case port for creating and editing experiments.
///
/// Bodies are passed as raw JSON so that lookup failures take precedence over
/// body validation failures.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperimentCommand: Send + Sync {
    /// Create an experiment from a `{name, description}` body.
    async fn create_experiment(&self, body: &[u8]) -> Result<ExperimentView, Error>;

    /// Overwrite an experiment's name and description from a JSON body and
    /// return it with the caller's refreshed progress.
    async fn update_experiment(
        &self,
        user_id: UserId,
        experiment_id: ExperimentId,
        body: &[u8],
    ) -> Result<ExperimentView, Error>;
}
