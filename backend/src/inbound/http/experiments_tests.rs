//! Tests for experiment HTTP handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test as actix_test, web};
use mockall::predicate::eq;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::{MockExperimentCommand, MockExperimentQuery, MockUserQuery};
use crate::domain::{EXPERIMENT_NOT_FOUND, Experiment, Progress, UserId};

const CALLER: i32 = 7;

fn view(id: i32, name: &str, progress: Progress) -> ExperimentView {
    ExperimentView {
        experiment: Experiment {
            id: ExperimentId::new(id),
            name: name.to_owned(),
            description: format!("{name} description"),
        },
        progress,
    }
}

fn test_app(
    query: MockExperimentQuery,
    command: MockExperimentCommand,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(
        Arc::new(query),
        Arc::new(command),
        Arc::new(MockUserQuery::new()),
    );
    App::new()
        .app_data(web::Data::new(state))
        .wrap(crate::inbound::http::test_utils::test_session_middleware())
        .route(
            "/test/login",
            web::get().to(|session: SessionContext| async move {
                session.persist_user(UserId::new(CALLER))?;
                Ok::<_, Error>(HttpResponse::Ok())
            }),
        )
        .service(
            web::scope("/api")
                .service(list_experiments)
                .service(create_experiment)
                .service(get_experiment)
                .service(update_experiment),
        )
}

macro_rules! login_cookie {
    ($app:expr) => {{
        let res = actix_test::call_service(
            &$app,
            actix_test::TestRequest::get().uri("/test/login").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::OK);
        res.response()
            .cookies()
            .find(|cookie| cookie.name() == "session")
            .map(|cookie| cookie.into_owned())
            .expect("session cookie set")
    }};
}

#[rstest]
#[actix_web::test]
async fn list_requires_login() {
    let mut query = MockExperimentQuery::new();
    query.expect_list_experiments().times(0);
    let app = actix_test::init_service(test_app(query, MockExperimentCommand::new())).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/api/experiments").to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"status": 401, "errors": [{"status": 401, "title": "login required"}]})
    );
}

#[rstest]
#[actix_web::test]
async fn list_returns_experiments_in_order() {
    let mut query = MockExperimentQuery::new();
    query
        .expect_list_experiments()
        .with(eq(UserId::new(CALLER)))
        .times(1)
        .return_once(|_| {
            Ok(vec![
                view(2, "second", Progress::from_counts(4, 1)),
                view(1, "first", Progress::ZERO),
            ])
        });
    let app = actix_test::init_service(test_app(query, MockExperimentCommand::new())).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/experiments")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["status"], json!(200));
    assert_eq!(
        body["data"],
        json!([
            {"id": 2, "name": "second", "description": "second description", "progress": 25.0},
            {"id": 1, "name": "first", "description": "first description", "progress": 0.0}
        ])
    );
}

#[rstest]
#[actix_web::test]
async fn get_rejects_non_integer_identifier() {
    let mut query = MockExperimentQuery::new();
    query.expect_get_experiment().times(0);
    let app = actix_test::init_service(test_app(query, MockExperimentCommand::new())).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/experiments/abc")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["errors"][0]["title"], "experimentId must be an integer");
}

#[rstest]
#[actix_web::test]
async fn identity_is_checked_before_identifier() {
    let app = actix_test::init_service(test_app(
        MockExperimentQuery::new(),
        MockExperimentCommand::new(),
    ))
    .await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/experiments/abc")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[rstest]
#[actix_web::test]
async fn get_reports_missing_experiment() {
    let mut query = MockExperimentQuery::new();
    query
        .expect_get_experiment()
        .with(eq(UserId::new(CALLER)), eq(ExperimentId::new(99)))
        .times(1)
        .return_once(|_, _| Err(Error::not_found(EXPERIMENT_NOT_FOUND)));
    let app = actix_test::init_service(test_app(query, MockExperimentCommand::new())).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/experiments/99")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({"status": 404, "errors": [{"status": 404, "title": "no experiment found"}]})
    );
}

#[rstest]
#[actix_web::test]
async fn get_returns_experiment_projection() {
    let mut query = MockExperimentQuery::new();
    query
        .expect_get_experiment()
        .return_once(|_, _| Ok(view(3, "styles", Progress::from_counts(2, 1))));
    let app = actix_test::init_service(test_app(query, MockExperimentCommand::new())).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/experiments/3")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(
        body,
        json!({
            "status": 200,
            "data": {"id": 3, "name": "styles", "description": "styles description", "progress": 50.0}
        })
    );
}

#[rstest]
#[actix_web::test]
async fn internal_failures_are_redacted() {
    let mut query = MockExperimentQuery::new();
    query.expect_get_experiment().return_once(|_, _| {
        Err(Error::internal(
            "failed to count assignments: connection refused",
        ))
    });
    let app = actix_test::init_service(test_app(query, MockExperimentCommand::new())).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::get()
            .uri("/api/experiments/3")
            .cookie(cookie)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["errors"][0]["title"], "Internal Server Error");
}

#[rstest]
#[actix_web::test]
async fn create_forwards_raw_body_without_login() {
    let mut command = MockExperimentCommand::new();
    command
        .expect_create_experiment()
        .withf(|body: &[u8]| body == br#"{"name":"A/B test","description":"x"}"#)
        .times(1)
        .return_once(|_| Ok(view(1, "A/B test", Progress::ZERO)));
    let app = actix_test::init_service(test_app(MockExperimentQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/experiments")
            .set_payload(r#"{"name":"A/B test","description":"x"}"#)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["progress"], json!(0.0));
    assert_eq!(body["data"]["id"], json!(1));
}

#[rstest]
#[actix_web::test]
async fn create_reports_parse_failures_as_bad_request() {
    let mut command = MockExperimentCommand::new();
    command
        .expect_create_experiment()
        .return_once(|_| Err(Error::bad_request("EOF while parsing an object")));
    let app = actix_test::init_service(test_app(MockExperimentQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/experiments")
            .set_payload("{")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[rstest]
#[actix_web::test]
async fn create_rejects_oversized_body() {
    let mut command = MockExperimentCommand::new();
    command.expect_create_experiment().times(0);
    let app = actix_test::init_service(test_app(MockExperimentQuery::new(), command)).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post()
            .uri("/api/experiments")
            .set_payload(vec![b' '; MAX_BODY_BYTES + 1])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["errors"][0]["title"], "request body too large");
}

#[rstest]
#[actix_web::test]
async fn update_passes_identity_identifier_and_body() {
    let mut command = MockExperimentCommand::new();
    command
        .expect_update_experiment()
        .withf(|user, id, body: &[u8]| {
            *user == UserId::new(CALLER)
                && *id == ExperimentId::new(4)
                && body == br#"{"name":"new","description":"fresh"}"#
        })
        .times(1)
        .return_once(|_, _, _| Ok(view(4, "new", Progress::from_counts(4, 3))));
    let app = actix_test::init_service(test_app(MockExperimentQuery::new(), command)).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/experiments/4")
            .cookie(cookie)
            .set_payload(r#"{"name":"new","description":"fresh"}"#)
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["data"]["progress"], json!(75.0));
}

#[rstest]
#[case("/api/experiments/x", StatusCode::BAD_REQUEST)]
#[case("/api/experiments/1.0", StatusCode::BAD_REQUEST)]
#[actix_web::test]
async fn update_rejects_bad_identifier_before_calling_domain(
    #[case] uri: &str,
    #[case] status: StatusCode,
) {
    let mut command = MockExperimentCommand::new();
    command.expect_update_experiment().times(0);
    let app = actix_test::init_service(test_app(MockExperimentQuery::new(), command)).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri(uri)
            .cookie(cookie)
            .set_payload("{}")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), status);
}

#[rstest]
#[actix_web::test]
async fn oversized_update_to_missing_experiment_is_not_found() {
    let mut query = MockExperimentQuery::new();
    query
        .expect_get_experiment()
        .with(eq(UserId::new(CALLER)), eq(ExperimentId::new(77)))
        .times(1)
        .return_once(|_, _| Err(Error::not_found(EXPERIMENT_NOT_FOUND)));
    let mut command = MockExperimentCommand::new();
    command.expect_update_experiment().times(0);
    let app = actix_test::init_service(test_app(query, command)).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/experiments/77")
            .cookie(cookie)
            .set_payload(vec![b' '; MAX_BODY_BYTES + 1])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn oversized_update_to_existing_experiment_is_bad_request() {
    let mut query = MockExperimentQuery::new();
    query
        .expect_get_experiment()
        .times(1)
        .return_once(|_, _| Ok(view(5, "kept", Progress::ZERO)));
    let mut command = MockExperimentCommand::new();
    command.expect_update_experiment().times(0);
    let app = actix_test::init_service(test_app(query, command)).await;
    let cookie = login_cookie!(app);

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::put()
            .uri("/api/experiments/5")
            .cookie(cookie)
            .set_payload(vec![b' '; MAX_BODY_BYTES + 1])
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(res).await;
    assert_eq!(body["errors"][0]["title"], "request body too large");
}
