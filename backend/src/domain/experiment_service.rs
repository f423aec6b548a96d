//! Experiment domain service.
//!
//! Implements the experiment driving ports on top of the experiment and
//! assignment repositories, deriving each caller's progress from assignment
//! counts.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::try_join;

use crate::domain::ports::{
    AssignmentRepository, AssignmentRepositoryError, ExperimentCommand, ExperimentQuery,
    ExperimentRepository, ExperimentRepositoryError, ExperimentView,
};
use crate::domain::{
    Error, Experiment, ExperimentFields, ExperimentId, NewExperiment, Progress, UserId,
};

/// Title of the error returned for unknown experiment identifiers.
pub const EXPERIMENT_NOT_FOUND: &str = "no experiment found";

/// Experiment service implementing the read and write driving ports.
#[derive(Clone)]
pub struct ExperimentService<E, A> {
    experiments: Arc<E>,
    assignments: Arc<A>,
}

impl<E, A> ExperimentService<E, A> {
    /// Create a new service over the given repositories.
    pub fn new(experiments: Arc<E>, assignments: Arc<A>) -> Self {
        Self {
            experiments,
            assignments,
        }
    }
}

impl<E, A> ExperimentService<E, A>
where
    E: ExperimentRepository,
    A: AssignmentRepository,
{
    fn map_experiment_error(error: ExperimentRepositoryError) -> Error {
        Error::internal(format!("experiment store failure: {error}"))
    }

    /// Completion percentage of the user's assignments in the experiment.
    ///
    /// Both counts are read concurrently; either failure aborts the
    /// computation rather than being treated as zero.
    ///
    /// # Errors
    /// Returns an internal error wrapping the counting failure.
    pub async fn progress(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
    ) -> Result<Progress, Error> {
        let count_all = async {
            self.assignments
                .count_user_assignments(experiment_id, user_id)
                .await
                .map_err(|err: AssignmentRepositoryError| {
                    Error::internal(format!("failed to count assignments: {err}"))
                })
        };
        let count_complete = async {
            self.assignments
                .count_complete_user_assignments(experiment_id, user_id)
                .await
                .map_err(|err: AssignmentRepositoryError| {
                    Error::internal(format!("failed to count complete assignments: {err}"))
                })
        };

        let (all, complete) = try_join(count_all, count_complete).await?;
        Ok(Progress::from_counts(all, complete))
    }

    async fn require_experiment(&self, experiment_id: ExperimentId) -> Result<Experiment, Error> {
        self.experiments
            .find_by_id(experiment_id)
            .await
            .map_err(Self::map_experiment_error)?
            .ok_or_else(|| Error::not_found(EXPERIMENT_NOT_FOUND))
    }

    async fn view(&self, experiment: Experiment, user_id: UserId) -> Result<ExperimentView, Error> {
        let progress = self.progress(experiment.id, user_id).await?;
        Ok(ExperimentView {
            experiment,
            progress,
        })
    }
}

#[async_trait]
impl<E, A> ExperimentQuery for ExperimentService<E, A>
where
    E: ExperimentRepository,
    A: AssignmentRepository,
{
    async fn get_experiment(
        &self,
        user_id: UserId,
        experiment_id: ExperimentId,
    ) -> Result<ExperimentView, Error> {
        let experiment = self.require_experiment(experiment_id).await?;
        self.view(experiment, user_id).await
    }

    async fn list_experiments(&self, user_id: UserId) -> Result<Vec<ExperimentView>, Error> {
        let experiments = self
            .experiments
            .list()
            .await
            .map_err(Self::map_experiment_error)?;

        // TODO: batch the per-experiment counts into a single grouped query
        // once the assignment port grows a bulk variant.
        let mut views = Vec::with_capacity(experiments.len());
        for experiment in experiments {
            views.push(self.view(experiment, user_id).await?);
        }
        Ok(views)
    }
}

#[async_trait]
impl<E, A> ExperimentCommand for ExperimentService<E, A>
where
    E: ExperimentRepository,
    A: AssignmentRepository,
{
    async fn create_experiment(&self, body: &[u8]) -> Result<ExperimentView, Error> {
        let draft = NewExperiment::from(ExperimentFields::from_json(body)?);
        let experiment = self
            .experiments
            .create(&draft)
            .await
            .map_err(Self::map_experiment_error)?;

        // A new experiment has no assignments yet.
        Ok(ExperimentView {
            experiment,
            progress: Progress::ZERO,
        })
    }

    async fn update_experiment(
        &self,
        user_id: UserId,
        experiment_id: ExperimentId,
        body: &[u8],
    ) -> Result<ExperimentView, Error> {
        let mut experiment = self.require_experiment(experiment_id).await?;
        let fields = ExperimentFields::from_json(body)?;
        experiment.apply(fields);

        self.experiments
            .update(&experiment)
            .await
            .map_err(Self::map_experiment_error)?;

        self.view(experiment, user_id).await
    }
}

#[cfg(test)]
#[path = "experiment_service_tests.rs"]
mod tests;
