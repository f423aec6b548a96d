//! In-process store implementing every repository port.
//!
//! Used when no database URL is configured and by the HTTP integration tests.
//! Identifiers are assigned from per-table counters starting at 1.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{
    AssignmentRepository, AssignmentRepositoryError, ExperimentRepository,
    ExperimentRepositoryError, UserRepository, UserRepositoryError,
};
use crate::domain::{Assignment, Experiment, ExperimentId, NewExperiment, User, UserId};

#[derive(Debug, Default)]
struct Tables {
    experiments: BTreeMap<ExperimentId, Experiment>,
    assignments: Vec<Assignment>,
    users: BTreeMap<UserId, User>,
    next_experiment_id: i32,
    next_assignment_id: i32,
}

/// Shared in-memory tables. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a user.
    pub async fn insert_user(&self, user: User) {
        self.tables.write().await.users.insert(user.id, user);
    }

    /// Record an assignment and return its identifier.
    pub async fn insert_assignment(
        &self,
        user_id: UserId,
        experiment_id: ExperimentId,
        pair_id: i32,
        answer: Option<String>,
    ) -> i32 {
        let mut tables = self.tables.write().await;
        tables.next_assignment_id += 1;
        let id = tables.next_assignment_id;
        tables.assignments.push(Assignment {
            id,
            user_id,
            pair_id,
            experiment_id,
            answer,
            duration: 0,
        });
        id
    }

    async fn count_where(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
        complete_only: bool,
    ) -> i64 {
        let tables = self.tables.read().await;
        let count = tables
            .assignments
            .iter()
            .filter(|a| a.experiment_id == experiment_id && a.user_id == user_id)
            .filter(|a| !complete_only || a.is_complete())
            .count();
        i64::try_from(count).unwrap_or(i64::MAX)
    }
}

#[async_trait]
impl ExperimentRepository for InMemoryStore {
    async fn find_by_id(
        &self,
        id: ExperimentId,
    ) -> Result<Option<Experiment>, ExperimentRepositoryError> {
        Ok(self.tables.read().await.experiments.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Experiment>, ExperimentRepositoryError> {
        Ok(self
            .tables
            .read()
            .await
            .experiments
            .values()
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        experiment: &NewExperiment,
    ) -> Result<Experiment, ExperimentRepositoryError> {
        let mut tables = self.tables.write().await;
        tables.next_experiment_id += 1;
        let created = Experiment {
            id: ExperimentId::new(tables.next_experiment_id),
            name: experiment.name.clone(),
            description: experiment.description.clone(),
        };
        tables.experiments.insert(created.id, created.clone());
        Ok(created)
    }

    async fn update(&self, experiment: &Experiment) -> Result<(), ExperimentRepositoryError> {
        let mut tables = self.tables.write().await;
        match tables.experiments.get_mut(&experiment.id) {
            Some(stored) => {
                stored.clone_from(experiment);
                Ok(())
            }
            None => Err(ExperimentRepositoryError::query(format!(
                "experiment {} vanished before update",
                experiment.id
            ))),
        }
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryStore {
    async fn count_user_assignments(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
    ) -> Result<i64, AssignmentRepositoryError> {
        Ok(self.count_where(experiment_id, user_id, false).await)
    }

    async fn count_complete_user_assignments(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
    ) -> Result<i64, AssignmentRepositoryError> {
        Ok(self.count_where(experiment_id, user_id, true).await)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserRepositoryError> {
        Ok(self.tables.read().await.users.get(&id).cloned())
    }
}
