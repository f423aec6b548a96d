//! PostgreSQL-backed `AssignmentRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AssignmentRepository, AssignmentRepositoryError};
use crate::domain::{ExperimentId, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::pool::DbPool;
use super::schema::assignments;

/// Diesel-backed assignment counter.
#[derive(Clone)]
pub struct DieselAssignmentRepository {
    pool: DbPool,
}

impl DieselAssignmentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentRepository for DieselAssignmentRepository {
    async fn count_user_assignments(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
    ) -> Result<i64, AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        assignments::table
            .filter(assignments::experiment_id.eq(experiment_id.get()))
            .filter(assignments::user_id.eq(user_id.get()))
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn count_complete_user_assignments(
        &self,
        experiment_id: ExperimentId,
        user_id: UserId,
    ) -> Result<i64, AssignmentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        assignments::table
            .filter(assignments::experiment_id.eq(experiment_id.get()))
            .filter(assignments::user_id.eq(user_id.get()))
            .filter(assignments::answer.is_not_null())
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
