//! Shared validation helpers for inbound HTTP adapters.

use std::fmt;

use crate::domain::Error;

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldName(&'static str);

impl FieldName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Parse an integer URL parameter.
///
/// # Errors
/// Returns a bad-request error titled `"<field> must be an integer"` when the
/// raw value is not a base-10 `i32`.
///
/// # Examples
/// ```
/// use annotation_backend::inbound::http::validation::{FieldName, parse_path_id};
///
/// const ID: FieldName = FieldName::new("experimentId");
/// assert_eq!(parse_path_id("7", ID).ok(), Some(7));
/// assert_eq!(
///     parse_path_id("seven", ID).unwrap_err().title(),
///     "experimentId must be an integer"
/// );
/// ```
pub fn parse_path_id(raw: &str, field: FieldName) -> Result<i32, Error> {
    raw.parse::<i32>()
        .map_err(|_| Error::bad_request(format!("{field} must be an integer")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    const FIELD: FieldName = FieldName::new("experimentId");

    #[rstest]
    #[case("0", 0)]
    #[case("42", 42)]
    #[case("-3", -3)]
    fn parses_integers(#[case] raw: &str, #[case] expected: i32) {
        assert_eq!(parse_path_id(raw, FIELD).expect("valid id"), expected);
    }

    #[rstest]
    #[case("abc")]
    #[case("")]
    #[case("1.5")]
    #[case("99999999999")]
    fn rejects_non_integers(#[case] raw: &str) {
        let err = parse_path_id(raw, FIELD).expect_err("invalid id");
        assert_eq!(err.code(), ErrorCode::BadRequest);
        assert_eq!(err.title(), "experimentId must be an integer");
    }
}
