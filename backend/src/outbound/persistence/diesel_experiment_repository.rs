//! PostgreSQL-backed `ExperimentRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ExperimentRepository, ExperimentRepositoryError};
use crate::domain::{Experiment, ExperimentId, NewExperiment};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ExperimentRow, ExperimentUpdate, NewExperimentRow};
use super::pool::DbPool;
use super::schema::experiments;

/// Diesel-backed experiment store.
#[derive(Clone)]
pub struct DieselExperimentRepository {
    pool: DbPool,
}

impl DieselExperimentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ExperimentRepository for DieselExperimentRepository {
    async fn find_by_id(
        &self,
        id: ExperimentId,
    ) -> Result<Option<Experiment>, ExperimentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = experiments::table
            .find(id.get())
            .select(ExperimentRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Experiment::from))
    }

    async fn list(&self) -> Result<Vec<Experiment>, ExperimentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = experiments::table
            .order(experiments::id.asc())
            .select(ExperimentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Experiment::from).collect())
    }

    async fn create(
        &self,
        experiment: &NewExperiment,
    ) -> Result<Experiment, ExperimentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = diesel::insert_into(experiments::table)
            .values(NewExperimentRow::from(experiment))
            .returning(ExperimentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(Experiment::from(row))
    }

    async fn update(&self, experiment: &Experiment) -> Result<(), ExperimentRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let updated = diesel::update(experiments::table.find(experiment.id.get()))
            .set(ExperimentUpdate::from(experiment))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        if updated == 0 {
            return Err(ExperimentRepositoryError::query(format!(
                "experiment {} vanished before update",
                experiment.id
            )));
        }
        Ok(())
    }
}
