//! HTTP dispatch of domain failures and response envelopes.
//!
//! Purpose: keep the domain error type HTTP-agnostic while allowing Actix
//! handlers to return [`Error`] and [`Response`] directly. Failures render as
//! `{status, errors: [{status, title, details?}]}`; internal failures are
//! logged and redacted before they reach the client.

use actix_web::body::BoxBody;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, ResponseError};
use tracing::error;

use crate::domain::{Error, ErrorCode, INTERNAL_STATUS};
use crate::inbound::http::envelope::{HttpError, Response};
use crate::middleware::trace::TraceId;

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

fn status_for(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

fn redact_if_internal(error: &Error) -> HttpError {
    if error.code() == ErrorCode::Internal {
        HttpError::new(INTERNAL_STATUS, [ErrorCode::Internal.reason()])
    } else {
        HttpError::from(error)
    }
}

fn log_internal(error: &Error) {
    match TraceId::current() {
        Some(trace_id) => error!(%trace_id, %error, details = ?error.details(), "request failed"),
        None => error!(%error, details = ?error.details(), "request failed"),
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code().status())
    }

    fn error_response(&self) -> HttpResponse {
        if self.code() == ErrorCode::Internal {
            log_internal(self);
        }
        HttpResponse::build(ResponseError::status_code(self))
            .json(Response::failure(redact_if_internal(self)))
    }
}

impl Responder for Response {
    type Body = BoxBody;

    fn respond_to(self, _req: &HttpRequest) -> HttpResponse {
        if self.data.is_none() && self.errors.is_empty() {
            return HttpResponse::NoContent().finish();
        }
        HttpResponse::build(status_for(self.status)).json(self)
    }
}
