//! Builders wiring repositories into the HTTP driving ports.

use std::sync::Arc;

use actix_web::web;

use annotation_backend::domain::ports::{
    AssignmentRepository, ExperimentRepository, UserRepository,
};
use annotation_backend::domain::{ExperimentService, UserProfileService};
use annotation_backend::inbound::http::state::HttpState;
use annotation_backend::outbound::persistence::{
    DbPool, DieselAssignmentRepository, DieselExperimentRepository, DieselUserRepository,
    InMemoryStore,
};

/// Assemble handler state over any set of repository adapters.
pub fn http_state_from_repositories<E, A, U>(
    experiments: Arc<E>,
    assignments: Arc<A>,
    users: Arc<U>,
) -> HttpState
where
    E: ExperimentRepository + 'static,
    A: AssignmentRepository + 'static,
    U: UserRepository + 'static,
{
    let experiment_service = Arc::new(ExperimentService::new(experiments, assignments));
    HttpState::new(
        experiment_service.clone(),
        experiment_service,
        Arc::new(UserProfileService::new(users)),
    )
}

/// Diesel-backed state when a pool is configured, otherwise the in-memory
/// store.
///
/// The in-memory store starts empty, so the current-user lookup reports
/// not found until users are inserted.
pub fn build_http_state(pool: Option<&DbPool>) -> web::Data<HttpState> {
    let state = match pool {
        Some(pool) => http_state_from_repositories(
            Arc::new(DieselExperimentRepository::new(pool.clone())),
            Arc::new(DieselAssignmentRepository::new(pool.clone())),
            Arc::new(DieselUserRepository::new(pool.clone())),
        ),
        None => {
            let store = Arc::new(InMemoryStore::new());
            http_state_from_repositories(store.clone(), store.clone(), store)
        }
    };
    web::Data::new(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotation_backend::domain::{ErrorCode, USER_NOT_FOUND, UserId};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn state_without_pool_has_no_users() {
        let state = build_http_state(None);
        let err = state
            .users
            .current_user(UserId::new(1))
            .await
            .expect_err("empty store");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(err.title(), USER_NOT_FOUND);
    }

    #[rstest]
    #[tokio::test]
    async fn state_without_pool_starts_with_no_experiments() {
        let state = build_http_state(None);
        let listed = state
            .experiments_query
            .list_experiments(UserId::new(1))
            .await
            .expect("list from empty store");
        assert!(listed.is_empty());
    }
}
