//! Current-user handler.
//!
//! ```text
//! GET /api/me
//! ```

use actix_web::{get, web};

use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Response;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// Return the profile of the authenticated user.
#[utoipa::path(
    get,
    path = "/api/me",
    responses(
        (status = 200, description = "Current user", body = crate::inbound::http::schemas::UserEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "User not found", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<Response> {
    let user_id = session.require_user_id()?;
    let user = state.users.current_user(user_id).await?;
    Ok(Response::user(&user))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test as actix_test};
    use mockall::predicate::eq;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;
    use crate::domain::ports::{MockExperimentCommand, MockExperimentQuery, MockUserQuery};
    use crate::domain::{Error, Role, USER_NOT_FOUND, User, UserId};

    async fn call_me(users: MockUserQuery, logged_in: bool) -> actix_web::dev::ServiceResponse {
        let state = HttpState::new(
            Arc::new(MockExperimentQuery::new()),
            Arc::new(MockExperimentCommand::new()),
            Arc::new(users),
        );
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .wrap(crate::inbound::http::test_utils::test_session_middleware())
                .route(
                    "/test/login",
                    web::get().to(|session: SessionContext| async move {
                        session.persist_user(UserId::new(5))?;
                        Ok::<_, Error>(HttpResponse::Ok())
                    }),
                )
                .service(web::scope("/api").service(current_user)),
        )
        .await;

        let mut request = actix_test::TestRequest::get().uri("/api/me");
        if logged_in {
            let res = actix_test::call_service(
                &app,
                actix_test::TestRequest::get().uri("/test/login").to_request(),
            )
            .await;
            let cookie = res
                .response()
                .cookies()
                .find(|cookie| cookie.name() == "session")
                .map(|cookie| cookie.into_owned())
                .expect("session cookie set");
            request = request.cookie(cookie);
        }
        actix_test::call_service(&app, request.to_request()).await
    }

    #[rstest]
    #[actix_web::test]
    async fn returns_user_projection() {
        let mut users = MockUserQuery::new();
        users
            .expect_current_user()
            .with(eq(UserId::new(5)))
            .times(1)
            .return_once(|id| {
                Ok(User {
                    id,
                    login: "octocat".into(),
                    username: "The Octocat".into(),
                    avatar_url: "https://avatars.example/octocat.png".into(),
                    role: Role::Requester,
                })
            });

        let res = call_me(users, true).await;
        assert_eq!(res.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            body["data"],
            json!({
                "id": 5,
                "login": "octocat",
                "username": "The Octocat",
                "avatarURL": "https://avatars.example/octocat.png",
                "role": "requester"
            })
        );
    }

    #[rstest]
    #[actix_web::test]
    async fn requires_login() {
        let mut users = MockUserQuery::new();
        users.expect_current_user().times(0);

        let res = call_me(users, false).await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_user_is_not_found() {
        let mut users = MockUserQuery::new();
        users
            .expect_current_user()
            .return_once(|_| Err(Error::not_found(USER_NOT_FOUND)));

        let res = call_me(users, true).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(res).await;
        assert_eq!(body["errors"][0]["title"], USER_NOT_FOUND);
    }
}
