//! Uniform response envelope.
//!
//! Every API response body has the shape `{status, data?, errors?}`. Domain
//! entities are projected onto dedicated wire structs that copy only the
//! fields clients see, so storage details never leak into the payload.
//!
//! A present payload always carries status 200 and an absent one status 204.
//! [`Response::empty`] is the "nothing to send" sentinel: it carries no
//! status at all and is rendered as `204 No Content` by the dispatcher.

mod error;

pub use error::HttpError;

use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::{
    AnnotationSummary, Assignment, Experiment, Feature, FilePair, Progress, User,
};

/// Status of an envelope carrying a payload.
pub const STATUS_OK: u16 = 200;
/// Status of an envelope without payload.
pub const STATUS_NO_CONTENT: u16 = 204;

/// Uniform response container.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Response {
    /// HTTP status code; `0` only for the empty sentinel.
    pub status: u16,
    /// Projected payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData>,
    /// Failures reported to the client.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<HttpError>,
}

/// Closed set of payload kinds an envelope can carry.
///
/// Serialized untagged: the wire shape is the projected struct itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseData {
    Experiment(ExperimentBody),
    Experiments(Vec<ExperimentBody>),
    Assignments(Vec<AssignmentBody>),
    AnnotationSummary(AnnotationSummaryBody),
    FilePair(FilePairBody),
    FilePairs(Vec<FilePairListItem>),
    User(UserBody),
    Features(FeaturesBody),
    Count(CountBody),
    Version(VersionBody),
    FilePairsUpload(FilePairsUploadBody),
    Token(TokenBody),
}

/// Experiment projection with the caller's progress.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ExperimentBody {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Duplicated functions")]
    pub name: String,
    pub description: String,
    /// Completion percentage in `0..=100`.
    #[schema(example = 25.0)]
    pub progress: f32,
}

impl ExperimentBody {
    fn project(experiment: &Experiment, progress: Progress) -> Self {
        Self {
            id: experiment.id.get(),
            name: experiment.name.clone(),
            description: experiment.description.clone(),
            progress: progress.percent(),
        }
    }
}

/// Assignment projection; `answer` is `null` until answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentBody {
    pub id: i32,
    pub user_id: i32,
    pub pair_id: i32,
    pub experiment_id: i32,
    pub answer: Option<String>,
    pub duration: i32,
}

/// Answer tallies of an experiment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct AnnotationSummaryBody {
    pub yes: i64,
    pub maybe: i64,
    pub no: i64,
    pub skip: i64,
    pub unanswered: i64,
    pub total: i64,
}

/// File pair detail projection.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilePairBody {
    pub id: i32,
    pub diff: String,
    pub score: f64,
    pub left_blob_id: String,
    pub right_blob_id: String,
    pub left_loc: usize,
    pub right_loc: usize,
}

/// File pair list entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FilePairListItem {
    pub id: i32,
    pub left_path: String,
    pub right_path: String,
}

/// User projection. `avatarURL` keeps its historical casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserBody {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "octocat")]
    pub login: String,
    #[schema(example = "The Octocat")]
    pub username: String,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    #[schema(example = "requester")]
    pub role: String,
}

/// Named feature weight.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeatureBody {
    pub name: String,
    pub weight: f64,
}

impl From<&Feature> for FeatureBody {
    fn from(feature: &Feature) -> Self {
        Self {
            name: feature.name.clone(),
            weight: feature.weight,
        }
    }
}

/// Features of both sides of a pair plus the pair score.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FeaturesBody {
    #[serde(rename = "featuresA")]
    pub features_a: Vec<FeatureBody>,
    #[serde(rename = "featuresB")]
    pub features_b: Vec<FeatureBody>,
    pub score: FeatureBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct CountBody {
    pub count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct VersionBody {
    #[schema(example = "0.1.0")]
    pub version: String,
}

/// Outcome of a file pair upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct FilePairsUploadBody {
    pub success: i64,
    pub failures: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct TokenBody {
    pub token: String,
}

impl Response {
    /// Wrap an optional payload: present → 200, absent → 204.
    ///
    /// # Examples
    /// ```
    /// use annotation_backend::inbound::http::envelope::{Response, ResponseData, CountBody};
    ///
    /// assert_eq!(Response::new(None).status, 204);
    /// let counted = Response::new(Some(ResponseData::Count(CountBody { count: 3 })));
    /// assert_eq!(counted.status, 200);
    /// ```
    pub fn new(data: Option<ResponseData>) -> Self {
        match data {
            Some(data) => Self {
                status: STATUS_OK,
                data: Some(data),
                errors: Vec::new(),
            },
            None => Self {
                status: STATUS_NO_CONTENT,
                data: None,
                errors: Vec::new(),
            },
        }
    }

    /// Envelope with neither status, payload nor errors.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether this is the empty sentinel.
    pub fn is_empty(&self) -> bool {
        self.status == 0 && self.data.is_none() && self.errors.is_empty()
    }

    /// Failure envelope carrying a single error and its status.
    pub fn failure(error: HttpError) -> Self {
        Self {
            status: error.status,
            data: None,
            errors: vec![error],
        }
    }

    fn with(data: ResponseData) -> Self {
        Self::new(Some(data))
    }

    pub fn experiment(experiment: &Experiment, progress: Progress) -> Self {
        Self::with(ResponseData::Experiment(ExperimentBody::project(
            experiment, progress,
        )))
    }

    /// List of experiments, each paired with the caller's progress, in the
    /// given order.
    pub fn experiments<'a>(items: impl IntoIterator<Item = (&'a Experiment, Progress)>) -> Self {
        let bodies = items
            .into_iter()
            .map(|(experiment, progress)| ExperimentBody::project(experiment, progress))
            .collect();
        Self::with(ResponseData::Experiments(bodies))
    }

    pub fn assignments<'a>(assignments: impl IntoIterator<Item = &'a Assignment>) -> Self {
        let bodies = assignments
            .into_iter()
            .map(|assignment| AssignmentBody {
                id: assignment.id,
                user_id: assignment.user_id.get(),
                pair_id: assignment.pair_id,
                experiment_id: assignment.experiment_id.get(),
                answer: assignment.answer.clone(),
                duration: assignment.duration,
            })
            .collect();
        Self::with(ResponseData::Assignments(bodies))
    }

    pub fn annotation_summary(summary: &AnnotationSummary) -> Self {
        Self::with(ResponseData::AnnotationSummary(AnnotationSummaryBody {
            yes: summary.yes,
            maybe: summary.maybe,
            no: summary.no,
            skip: summary.skip,
            unanswered: summary.unanswered,
            total: summary.total,
        }))
    }

    /// File pair detail with a precomputed diff and line counts.
    pub fn file_pair(
        pair: &FilePair,
        diff: impl Into<String>,
        left_loc: usize,
        right_loc: usize,
    ) -> Self {
        Self::with(ResponseData::FilePair(FilePairBody {
            id: pair.id,
            diff: diff.into(),
            score: pair.score,
            left_blob_id: pair.left.blob_id.clone(),
            right_blob_id: pair.right.blob_id.clone(),
            left_loc,
            right_loc,
        }))
    }

    pub fn file_pairs<'a>(pairs: impl IntoIterator<Item = &'a FilePair>) -> Self {
        let items = pairs
            .into_iter()
            .map(|pair| FilePairListItem {
                id: pair.id,
                left_path: pair.left.path.clone(),
                right_path: pair.right.path.clone(),
            })
            .collect();
        Self::with(ResponseData::FilePairs(items))
    }

    pub fn user(user: &User) -> Self {
        Self::with(ResponseData::User(UserBody {
            id: user.id.get(),
            login: user.login.clone(),
            username: user.username.clone(),
            avatar_url: user.avatar_url.clone(),
            role: user.role.as_str().to_owned(),
        }))
    }

    pub fn features(features_a: &[Feature], features_b: &[Feature], score: &Feature) -> Self {
        Self::with(ResponseData::Features(FeaturesBody {
            features_a: features_a.iter().map(FeatureBody::from).collect(),
            features_b: features_b.iter().map(FeatureBody::from).collect(),
            score: FeatureBody::from(score),
        }))
    }

    pub fn count(count: i64) -> Self {
        Self::with(ResponseData::Count(CountBody { count }))
    }

    pub fn version(version: impl Into<String>) -> Self {
        Self::with(ResponseData::Version(VersionBody {
            version: version.into(),
        }))
    }

    pub fn file_pairs_upload(success: i64, failures: i64) -> Self {
        Self::with(ResponseData::FilePairsUpload(FilePairsUploadBody {
            success,
            failures,
        }))
    }

    pub fn token(token: impl Into<String>) -> Self {
        Self::with(ResponseData::Token(TokenBody {
            token: token.into(),
        }))
    }
}
