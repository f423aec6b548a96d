//! Experiment aggregate and the progress value derived from assignments.

use std::fmt;

use serde::Deserialize;

use super::Error;

/// Stable experiment identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExperimentId(i32);

impl ExperimentId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ExperimentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named study under which users answer assigned file pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Experiment {
    /// Identifier assigned by the store.
    pub id: ExperimentId,
    /// Short name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

impl Experiment {
    /// Overwrite the mutable fields. The identifier never changes.
    pub fn apply(&mut self, fields: ExperimentFields) {
        let ExperimentFields { name, description } = fields;
        self.name = name;
        self.description = description;
    }
}

/// Experiment draft handed to the store, which assigns the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExperiment {
    /// Short name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

impl From<ExperimentFields> for NewExperiment {
    fn from(value: ExperimentFields) -> Self {
        Self {
            name: value.name,
            description: value.description,
        }
    }
}

/// Client-editable experiment fields as carried in request bodies.
///
/// Missing fields default to empty strings; fields of the wrong type are
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExperimentFields {
    /// Short name.
    pub name: String,
    /// Free-form description.
    pub description: String,
}

impl ExperimentFields {
    /// Parse the fields from a raw JSON body.
    ///
    /// # Errors
    /// Returns [`Error::bad_request`] carrying the parser message when the
    /// body is not a JSON object with string fields.
    ///
    /// # Examples
    /// ```
    /// use annotation_backend::domain::ExperimentFields;
    ///
    /// let fields = ExperimentFields::from_json(br#"{"name":"A/B test","description":"x"}"#)
    ///     .expect("valid body");
    /// assert_eq!(fields.name, "A/B test");
    /// assert!(ExperimentFields::from_json(b"{\"name\":").is_err());
    /// ```
    pub fn from_json(body: &[u8]) -> Result<Self, Error> {
        serde_json::from_slice(body).map_err(|err| Error::bad_request(err.to_string()))
    }
}

/// Share of a user's assignments that carry an answer, in percent.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Progress(f32);

impl Progress {
    /// Progress of an experiment without any assignments.
    pub const ZERO: Self = Self(0.0);

    /// Derive progress from assignment counts.
    ///
    /// An experiment without assignments for the user is 0% complete. The
    /// ratio is kept at full `f32` precision.
    ///
    /// # Examples
    /// ```
    /// use annotation_backend::domain::Progress;
    ///
    /// assert_eq!(Progress::from_counts(4, 1).percent(), 25.0);
    /// assert_eq!(Progress::from_counts(0, 0).percent(), 0.0);
    /// ```
    #[expect(
        clippy::cast_precision_loss,
        reason = "assignment counts stay far below f32 integer precision"
    )]
    pub fn from_counts(count_all: i64, count_complete: i64) -> Self {
        if count_all == 0 {
            return Self::ZERO;
        }
        Self(100.0 * count_complete as f32 / count_all as f32)
    }

    /// Percentage value in the range `0.0..=100.0` for consistent counts.
    pub const fn percent(self) -> f32 {
        self.0
    }
}
