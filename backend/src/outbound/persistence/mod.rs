//! Repository adapters for the experiment, assignment and user ports.
//!
//! PostgreSQL adapters use Diesel with `diesel-async` over a `bb8` pool. Row
//! structs and the table schema stay private to this module; only domain
//! types cross the port boundary. [`InMemoryStore`] implements the same ports
//! without a database.
//!
//! ```ignore
//! use annotation_backend::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/annotations")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_assignment_repository;
mod diesel_error_mapping;
mod diesel_experiment_repository;
mod diesel_user_repository;
mod memory;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_assignment_repository::DieselAssignmentRepository;
pub use diesel_experiment_repository::DieselExperimentRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use memory::InMemoryStore;
pub use migrations::{MIGRATIONS, MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
