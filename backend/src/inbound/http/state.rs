//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ExperimentCommand, ExperimentQuery, UserQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub experiments_query: Arc<dyn ExperimentQuery>,
    pub experiments_command: Arc<dyn ExperimentCommand>,
    pub users: Arc<dyn UserQuery>,
}

impl HttpState {
    /// Bundle the driving ports used by the handlers.
    pub fn new(
        experiments_query: Arc<dyn ExperimentQuery>,
        experiments_command: Arc<dyn ExperimentCommand>,
        users: Arc<dyn UserQuery>,
    ) -> Self {
        Self {
            experiments_query,
            experiments_command,
            users,
        }
    }
}
