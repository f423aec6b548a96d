//! Service metadata endpoints.

use actix_web::get;

use crate::inbound::http::envelope::Response;

/// Version reported by `GET /api/version`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Report the running server version. No login required.
#[utoipa::path(
    get,
    path = "/api/version",
    responses(
        (status = 200, description = "Server version", body = crate::inbound::http::schemas::VersionEnvelopeSchema)
    ),
    tags = ["meta"],
    operation_id = "version",
    security([])
)]
#[get("/version")]
pub async fn version() -> Response {
    Response::version(VERSION)
}
