//! OpenAPI schema definitions for response envelopes and request bodies.
//!
//! The runtime envelope carries an untagged payload enum, which does not map
//! onto a single useful schema. These wrappers describe the concrete
//! envelope each endpoint returns; they are never constructed.

use utoipa::ToSchema;

use crate::inbound::http::envelope::{ExperimentBody, HttpError, UserBody, VersionBody};

/// Request body accepted when creating or updating an experiment.
///
/// Missing fields default to empty strings.
#[derive(ToSchema)]
#[schema(as = ExperimentFields)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExperimentFieldsSchema {
    #[schema(example = "Duplicated functions")]
    name: String,
    #[schema(example = "Are these two functions duplicates?")]
    description: String,
}

/// Envelope carrying one experiment.
#[derive(ToSchema)]
#[schema(as = ExperimentEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExperimentEnvelopeSchema {
    #[schema(example = 200)]
    status: u16,
    data: ExperimentBody,
}

/// Envelope carrying every experiment in listing order.
#[derive(ToSchema)]
#[schema(as = ExperimentListEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ExperimentListEnvelopeSchema {
    #[schema(example = 200)]
    status: u16,
    data: Vec<ExperimentBody>,
}

/// Envelope carrying the current user.
#[derive(ToSchema)]
#[schema(as = UserEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserEnvelopeSchema {
    #[schema(example = 200)]
    status: u16,
    data: UserBody,
}

/// Envelope carrying the server version.
#[derive(ToSchema)]
#[schema(as = VersionEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct VersionEnvelopeSchema {
    #[schema(example = 200)]
    status: u16,
    data: VersionBody,
}

/// Failure envelope.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    #[schema(example = 404)]
    status: u16,
    errors: Vec<HttpError>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn property_names<T: PartialSchema>() -> Vec<String> {
        match T::schema() {
            RefOr::T(Schema::Object(object)) => object.properties.keys().cloned().collect(),
            _ => panic!("expected an object schema"),
        }
    }

    #[rstest]
    fn experiment_envelope_has_status_and_data() {
        assert_eq!(
            property_names::<ExperimentEnvelopeSchema>(),
            vec!["data".to_owned(), "status".to_owned()]
        );
    }

    #[rstest]
    fn error_envelope_has_status_and_errors() {
        assert_eq!(
            property_names::<ErrorEnvelopeSchema>(),
            vec!["errors".to_owned(), "status".to_owned()]
        );
    }

    #[rstest]
    fn user_body_keeps_avatar_casing() {
        let names = property_names::<UserBody>();
        assert!(names.contains(&"avatarURL".to_owned()), "{names:?}");
    }
}
