//! Experiment API handlers.
//!
//! ```text
//! GET /api/experiments
//! POST /api/experiments {"name":"A/B test","description":"..."}
//! GET /api/experiments/{experimentId}
//! PUT /api/experiments/{experimentId} {"name":"A/B test","description":"..."}
//! ```
//!
//! Handlers resolve the caller and the path parameter, then hand the raw
//! body to the domain so that a missing experiment is reported before a
//! malformed body. An update whose body cannot be read at all (too large or
//! broken in transit) still looks the experiment up first.

use actix_web::{get, post, put, web};
use futures_util::StreamExt;

use crate::domain::{Error, ExperimentId};
use crate::domain::ports::ExperimentView;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Response;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, parse_path_id};

const EXPERIMENT_ID: FieldName = FieldName::new("experimentId");

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 64 * 1024;

fn parse_experiment_id(raw: &str) -> Result<ExperimentId, Error> {
    parse_path_id(raw, EXPERIMENT_ID).map(ExperimentId::new)
}

/// Drain the request body, reporting transport failures as bad requests.
async fn read_body(mut payload: web::Payload) -> Result<web::Bytes, Error> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|err| Error::bad_request(err.to_string()))?;
        if body.len() + chunk.len() > MAX_BODY_BYTES {
            return Err(Error::bad_request("request body too large"));
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

fn experiment_response(view: &ExperimentView) -> Response {
    Response::experiment(&view.experiment, view.progress)
}

/// List every experiment with the caller's progress.
#[utoipa::path(
    get,
    path = "/api/experiments",
    responses(
        (status = 200, description = "Experiments", body = crate::inbound::http::schemas::ExperimentListEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["experiments"],
    operation_id = "listExperiments"
)]
#[get("/experiments")]
pub async fn list_experiments(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<Response> {
    let user_id = session.require_user_id()?;
    let views = state.experiments_query.list_experiments(user_id).await?;
    Ok(Response::experiments(
        views.iter().map(|view| (&view.experiment, view.progress)),
    ))
}

/// Fetch one experiment with the caller's progress.
#[utoipa::path(
    get,
    path = "/api/experiments/{experimentId}",
    params(("experimentId" = i32, Path, description = "Experiment identifier")),
    responses(
        (status = 200, description = "Experiment", body = crate::inbound::http::schemas::ExperimentEnvelopeSchema),
        (status = 400, description = "Invalid identifier", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "No experiment found", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["experiments"],
    operation_id = "getExperiment"
)]
#[get("/experiments/{experimentId}")]
pub async fn get_experiment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<Response> {
    let user_id = session.require_user_id()?;
    let experiment_id = parse_experiment_id(&path)?;
    let view = state
        .experiments_query
        .get_experiment(user_id, experiment_id)
        .await?;
    Ok(experiment_response(&view))
}

/// Create an experiment. New experiments start at 0% progress.
#[utoipa::path(
    post,
    path = "/api/experiments",
    request_body = crate::inbound::http::schemas::ExperimentFieldsSchema,
    responses(
        (status = 200, description = "Created experiment", body = crate::inbound::http::schemas::ExperimentEnvelopeSchema),
        (status = 400, description = "Malformed body", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["experiments"],
    operation_id = "createExperiment"
)]
#[post("/experiments")]
pub async fn create_experiment(
    state: web::Data<HttpState>,
    payload: web::Payload,
) -> ApiResult<Response> {
    let body = read_body(payload).await?;
    let view = state.experiments_command.create_experiment(&body).await?;
    Ok(experiment_response(&view))
}

/// Overwrite an experiment's name and description.
#[utoipa::path(
    put,
    path = "/api/experiments/{experimentId}",
    params(("experimentId" = i32, Path, description = "Experiment identifier")),
    request_body = crate::inbound::http::schemas::ExperimentFieldsSchema,
    responses(
        (status = 200, description = "Updated experiment", body = crate::inbound::http::schemas::ExperimentEnvelopeSchema),
        (status = 400, description = "Invalid identifier or malformed body", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 401, description = "Unauthorised", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 404, description = "No experiment found", body = crate::inbound::http::schemas::ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = crate::inbound::http::schemas::ErrorEnvelopeSchema)
    ),
    tags = ["experiments"],
    operation_id = "updateExperiment"
)]
#[put("/experiments/{experimentId}")]
pub async fn update_experiment(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Payload,
) -> ApiResult<Response> {
    let user_id = session.require_user_id()?;
    let experiment_id = parse_experiment_id(&path)?;
    let body = match read_body(payload).await {
        Ok(body) => body,
        Err(error) => {
            // A missing experiment outranks an unreadable body.
            state
                .experiments_query
                .get_experiment(user_id, experiment_id)
                .await?;
            return Err(error);
        }
    };
    let view = state
        .experiments_command
        .update_experiment(user_id, experiment_id, &body)
        .await?;
    Ok(experiment_response(&view))
}

#[cfg(test)]
#[path = "experiments_tests.rs"]
mod tests;
