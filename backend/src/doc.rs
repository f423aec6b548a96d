//! OpenAPI documentation for the REST API.
//!
//! [`ApiDoc`] registers the experiment, user, version and health endpoints
//! together with the envelope schemas they return. Swagger UI serves it in
//! debug builds.

use crate::inbound::http::envelope::{
    ExperimentBody, HttpError, UserBody, VersionBody,
};
use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, ExperimentEnvelopeSchema, ExperimentFieldsSchema,
    ExperimentListEnvelopeSchema, UserEnvelopeSchema, VersionEnvelopeSchema,
};
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

/// Adds the session cookie security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "SessionCookie",
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie holding the authenticated user id.",
            ))),
        );
    }
}

/// OpenAPI document for the annotation API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Annotation backend API",
        description = "Experiments, progress and user profiles for the code annotation service."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::experiments::list_experiments,
        crate::inbound::http::experiments::get_experiment,
        crate::inbound::http::experiments::create_experiment,
        crate::inbound::http::experiments::update_experiment,
        crate::inbound::http::users::current_user,
        crate::inbound::http::meta::version,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ExperimentFieldsSchema,
        ExperimentEnvelopeSchema,
        ExperimentListEnvelopeSchema,
        UserEnvelopeSchema,
        VersionEnvelopeSchema,
        ErrorEnvelopeSchema,
        ExperimentBody,
        UserBody,
        VersionBody,
        HttpError,
    )),
    tags(
        (name = "experiments", description = "Experiment management and progress"),
        (name = "users", description = "Operations related to users"),
        (name = "meta", description = "Server metadata"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
