//! Driving port for experiment reads.
//!
//! Inbound adapters use this port to fetch experiments together with the
//! caller's progress without touching persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, Experiment, ExperimentId, Progress, UserId};

/// Experiment paired with the requesting user's progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ExperimentView {
    /// Stored experiment.
    pub experiment: Experiment,
    /// Caller's completion percentage.
    pub progress: Progress,
}

/// Domain use-case port for reading experiments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperimentQuery: Send + Sync {
    /// Fetch one experiment with the caller's progress.
    ///
    /// Fails with a not-found error when the experiment does not exist.
    async fn get_experiment(
        &self,
        user_id: UserId,
        experiment_id: ExperimentId,
    ) -> Result<ExperimentView, Error>;

    /// List every experiment with the caller's progress, preserving the
    /// store's order.
    async fn list_experiments(&self, user_id: UserId) -> Result<Vec<ExperimentView>, Error>;
}
