//! Assignment of a file pair to a user within an experiment.

use super::{ExperimentId, UserId};

/// Links a user, an experiment and a file pair.
///
/// `answer` is `None` until the user answers the pair; an empty string is a
/// recorded answer, not an absent one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Identifier assigned by the store.
    pub id: i32,
    /// User the pair was assigned to.
    pub user_id: UserId,
    /// Assigned file pair.
    pub pair_id: i32,
    /// Owning experiment.
    pub experiment_id: ExperimentId,
    /// Recorded answer, if any.
    pub answer: Option<String>,
    /// Time spent answering, in milliseconds.
    pub duration: i32,
}

impl Assignment {
    /// Whether the user has recorded an answer.
    pub const fn is_complete(&self) -> bool {
        self.answer.is_some()
    }
}

/// Answer tallies for an experiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnnotationSummary {
    /// Pairs answered "yes".
    pub yes: i64,
    /// Pairs answered "maybe".
    pub maybe: i64,
    /// Pairs answered "no".
    pub no: i64,
    /// Pairs answered "skip".
    pub skip: i64,
    /// Pairs without an answer.
    pub unanswered: i64,
    /// All counted pairs.
    pub total: i64,
}

impl AnnotationSummary {
    /// Tally the answers of the given assignments.
    ///
    /// Answers outside the known vocabulary only count towards `total`.
    ///
    /// # Examples
    /// ```
    /// use annotation_backend::domain::{AnnotationSummary, Assignment, ExperimentId, UserId};
    ///
    /// let assignment = |answer: Option<&str>| Assignment {
    ///     id: 1,
    ///     user_id: UserId::new(1),
    ///     pair_id: 1,
    ///     experiment_id: ExperimentId::new(1),
    ///     answer: answer.map(str::to_owned),
    ///     duration: 0,
    /// };
    /// let summary = AnnotationSummary::tally(&[assignment(Some("yes")), assignment(None)]);
    /// assert_eq!((summary.yes, summary.unanswered, summary.total), (1, 1, 2));
    /// ```
    pub fn tally<'a>(assignments: impl IntoIterator<Item = &'a Assignment>) -> Self {
        assignments
            .into_iter()
            .fold(Self::default(), |mut summary, assignment| {
                match assignment.answer.as_deref() {
                    Some("yes") => summary.yes += 1,
                    Some("maybe") => summary.maybe += 1,
                    Some("no") => summary.no += 1,
                    Some("skip") => summary.skip += 1,
                    Some(_) => {}
                    None => summary.unanswered += 1,
                }
                summary.total += 1;
                summary
            })
    }
}
