//! Port abstraction for assignment counting.

use async_trait::async_trait;

use crate::domain::{ExperimentId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by assignment repository adapters.
    pub enum AssignmentRepositoryError {
        /// Repository connection could not be established.
        Connection => "assignment repository connection failed: {message}",
        /// Query failed during execution.
        Query => "assignment repository query failed: {message}",
    }
}

/// Driven port exposing the assignment counts behind experiment progress.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AssignmentRepository: Send + Sync {
    /// Number of assignments the user holds in the experiment.
    async fn count_user_assignments(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
    ) -> Result<i64, AssignmentRepositoryError>;

    /// Number of those assignments that carry an answer.
    async fn count_complete_user_assignments(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
    ) -> Result<i64, AssignmentRepositoryError>;
}
