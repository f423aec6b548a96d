//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod assignment_repository;
mod experiment_command;
mod experiment_query;
mod experiment_repository;
mod user_query;
mod user_repository;

pub use assignment_repository::{AssignmentRepository, AssignmentRepositoryError};
#[cfg(test)]
pub use assignment_repository::MockAssignmentRepository;
pub use experiment_command::ExperimentCommand;
#[cfg(test)]
pub use experiment_command::MockExperimentCommand;
pub use experiment_query::{ExperimentQuery, ExperimentView};
#[cfg(test)]
pub use experiment_query::MockExperimentQuery;
pub use experiment_repository::{ExperimentRepository, ExperimentRepositoryError};
#[cfg(test)]
pub use experiment_repository::MockExperimentRepository;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_repository::{UserRepository, UserRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
