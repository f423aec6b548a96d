//! Port abstraction for experiment persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{Experiment, ExperimentId, NewExperiment};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by experiment repository adapters.
    pub enum ExperimentRepositoryError {
        /// Repository connection could not be established.
        Connection => "experiment repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query => "experiment repository query failed: {message}",
    }
}

/// Driven port for reading and writing experiments.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ExperimentRepository: Send + Sync {
    /// Fetch an experiment by identifier.
    async fn find_by_id(
        &self,
        id: ExperimentId,
    ) -> Result<Option<Experiment>, ExperimentRepositoryError>;

    /// List every experiment in the store's natural order.
    async fn list(&self) -> Result<Vec<Experiment>, ExperimentRepositoryError>;

    /// Persist a draft and return it with its assigned identifier.
    async fn create(
        &self,
        experiment: &NewExperiment,
    ) -> Result<Experiment, ExperimentRepositoryError>;

    /// Overwrite the stored name and description of an existing experiment.
    async fn update(&self, experiment: &Experiment) -> Result<(), ExperimentRepositoryError>;
}
