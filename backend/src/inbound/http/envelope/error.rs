//! Status-bearing error value carried in the envelope's `errors` list.

use std::borrow::Cow;
use std::fmt;

use actix_web::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, StatusError};

/// Wire representation of a failure: `{status, title, details?}`.
///
/// # Examples
/// ```
/// use annotation_backend::domain::StatusError;
/// use annotation_backend::inbound::http::envelope::HttpError;
///
/// let err = HttpError::new(404, ["no", "experiment", "found"]);
/// assert_eq!(err.title, "no experiment found");
/// assert_eq!(err.status_code(), 404);
///
/// let bare = HttpError::new(400, Vec::<String>::new());
/// assert_eq!(bare.message(), "Bad Request");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct HttpError {
    /// HTTP status code.
    #[schema(example = 404)]
    pub status: u16,
    /// Human-readable summary; may be empty.
    #[schema(example = "no experiment found")]
    pub title: String,
    /// Supplementary free-form details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl HttpError {
    /// Build an error whose title is the given parts joined by single spaces.
    pub fn new<I, S>(status: u16, parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let title = parts
            .into_iter()
            .map(|part| part.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            status,
            title,
            details: None,
        }
    }

    /// Attach supplementary details.
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Standard reason phrase for a numeric status, if one is defined.
fn reason_phrase(status: u16) -> Option<&'static str> {
    StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
}

impl StatusError for HttpError {
    fn status_code(&self) -> u16 {
        self.status
    }

    fn message(&self) -> Cow<'_, str> {
        if !self.title.is_empty() {
            return Cow::Borrowed(self.title.as_str());
        }
        Cow::Borrowed(
            reason_phrase(self.status).unwrap_or_else(|| ErrorCode::Internal.reason()),
        )
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for HttpError {}

impl From<&Error> for HttpError {
    fn from(err: &Error) -> Self {
        Self {
            status: err.status_code(),
            title: err.message().into_owned(),
            details: err.details().map(str::to_owned),
        }
    }
}
