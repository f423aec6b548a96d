//! Domain-level error types.
//!
//! These errors are transport agnostic. Inbound adapters map them to HTTP
//! responses or any other protocol-specific envelope through the
//! [`StatusError`] capability.

use std::borrow::Cow;
use std::fmt;

/// Status code used whenever a more specific one cannot be rendered.
pub const INTERNAL_STATUS: u16 = 500;

/// Capability shared by every failure that can be rendered for a client.
///
/// Implementors report a numeric HTTP status and a human-readable message.
/// The message must never be empty: implementations fall back to the
/// standard reason phrase of their status when no title was supplied.
pub trait StatusError: std::error::Error {
    /// Numeric HTTP status code describing the failure.
    fn status_code(&self) -> u16;

    /// Rendered human-readable message.
    fn message(&self) -> Cow<'_, str>;
}

/// Failure categories understood by every adapter.
///
/// # Examples
/// ```
/// use annotation_backend::domain::ErrorCode;
///
/// assert_eq!(ErrorCode::NotFound.status(), 404);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No caller identity is attached to the request.
    Unauthenticated,
    /// A path parameter or request body could not be parsed.
    BadRequest,
    /// The referenced entity does not exist.
    NotFound,
    /// Persistence, counting or any other unexpected fault.
    Internal,
}

impl ErrorCode {
    /// HTTP status code for the category.
    pub const fn status(self) -> u16 {
        match self {
            Self::Unauthenticated => 401,
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => INTERNAL_STATUS,
        }
    }

    /// Standard reason phrase for the category's status code.
    pub const fn reason(self) -> &'static str {
        match self {
            Self::Unauthenticated => "Unauthorized",
            Self::BadRequest => "Bad Request",
            Self::NotFound => "Not Found",
            Self::Internal => "Internal Server Error",
        }
    }
}

/// Domain error payload.
///
/// The title may be empty; rendering then falls back to the reason phrase of
/// the error's category.
///
/// # Examples
/// ```
/// use annotation_backend::domain::{Error, ErrorCode, StatusError};
///
/// let err = Error::not_found("no experiment found");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// assert_eq!(err.status_code(), 404);
/// assert_eq!(err.to_string(), "no experiment found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: ErrorCode,
    title: String,
    details: Option<String>,
}

impl Error {
    /// Create a new error in the given category.
    pub fn new(code: ErrorCode, title: impl Into<String>) -> Self {
        Self {
            code,
            title: title.into(),
            details: None,
        }
    }

    /// Failure category.
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Title as supplied by the caller, possibly empty.
    pub fn title(&self) -> &str {
        self.title.as_str()
    }

    /// Supplementary free-form details for clients.
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Attach supplementary details to the error.
    ///
    /// # Examples
    /// ```
    /// use annotation_backend::domain::Error;
    ///
    /// let err = Error::bad_request("invalid body").with_details("expected an object");
    /// assert_eq!(err.details(), Some("expected an object"));
    /// ```
    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Convenience constructor for [`ErrorCode::Unauthenticated`].
    pub fn unauthenticated(title: impl Into<String>) -> Self {
        Self::new(ErrorCode::Unauthenticated, title)
    }

    /// Convenience constructor for [`ErrorCode::BadRequest`].
    pub fn bad_request(title: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, title)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, title)
    }

    /// Convenience constructor for [`ErrorCode::Internal`].
    pub fn internal(title: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, title)
    }
}

impl StatusError for Error {
    fn status_code(&self) -> u16 {
        self.code.status()
    }

    fn message(&self) -> Cow<'_, str> {
        if self.title.is_empty() {
            Cow::Borrowed(self.code.reason())
        } else {
            Cow::Borrowed(self.title.as_str())
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
