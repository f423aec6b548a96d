//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::{Experiment, ExperimentId, NewExperiment, Role, UnknownRole, User, UserId};

use super::schema::{experiments, users};

/// Row struct for reading from the experiments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = experiments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ExperimentRow {
    pub id: i32,
    pub name: String,
    pub description: String,
}

impl From<ExperimentRow> for Experiment {
    fn from(row: ExperimentRow) -> Self {
        Self {
            id: ExperimentId::new(row.id),
            name: row.name,
            description: row.description,
        }
    }
}

/// Insertable struct for creating experiments; the id is assigned by the
/// sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = experiments)]
pub(crate) struct NewExperimentRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a NewExperiment> for NewExperimentRow<'a> {
    fn from(draft: &'a NewExperiment) -> Self {
        Self {
            name: &draft.name,
            description: &draft.description,
        }
    }
}

/// Changeset overwriting the editable experiment columns.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = experiments)]
pub(crate) struct ExperimentUpdate<'a> {
    pub name: &'a str,
    pub description: &'a str,
}

impl<'a> From<&'a Experiment> for ExperimentUpdate<'a> {
    fn from(experiment: &'a Experiment) -> Self {
        Self {
            name: &experiment.name,
            description: &experiment.description,
        }
    }
}

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub login: String,
    pub username: String,
    pub avatar_url: String,
    pub role: String,
}

impl TryFrom<UserRow> for User {
    type Error = UnknownRole;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: UserId::new(row.id),
            role: row.role.parse::<Role>()?,
            login: row.login,
            username: row.username,
            avatar_url: row.avatar_url,
        })
    }
}
