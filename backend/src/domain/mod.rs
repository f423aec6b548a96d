//! Domain primitives, aggregates and services.
//!
//! Purpose: define the entities read by the experiment API, the transport
//! agnostic error taxonomy, and the services implementing the driving ports
//! on top of the driven ports in [`ports`].
//!
//! Public surface:
//! - Error / ErrorCode / StatusError: failure taxonomy and rendering.
//! - Experiment / Progress: experiment aggregate and per-user completion.
//! - Assignment / AnnotationSummary, FilePair, Feature, User: read models.
//! - ExperimentService / UserProfileService: port implementations.

pub mod assignment;
pub mod error;
pub mod experiment;
pub mod experiment_service;
pub mod feature;
pub mod file_pair;
pub mod ports;
pub mod user;
pub mod user_service;

pub use self::assignment::{AnnotationSummary, Assignment};
pub use self::error::{Error, ErrorCode, INTERNAL_STATUS, StatusError};
pub use self::experiment::{Experiment, ExperimentFields, ExperimentId, NewExperiment, Progress};
pub use self::experiment_service::{EXPERIMENT_NOT_FOUND, ExperimentService};
pub use self::feature::Feature;
pub use self::file_pair::{FilePair, FileSide};
pub use self::user::{Role, UnknownRole, User, UserId};
pub use self::user_service::{USER_NOT_FOUND, UserProfileService};
