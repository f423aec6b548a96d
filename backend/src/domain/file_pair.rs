//! File pairs compared by annotators.

use super::ExperimentId;

/// One side of a file pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSide {
    /// Content-addressed blob identifier.
    pub blob_id: String,
    /// Repository path of the file.
    pub path: String,
    /// Source code of the file.
    pub content: String,
}

/// Two code blobs with a similarity score.
#[derive(Debug, Clone, PartialEq)]
pub struct FilePair {
    /// Identifier assigned by the store.
    pub id: i32,
    /// Owning experiment.
    pub experiment_id: ExperimentId,
    /// Similarity score computed upstream.
    pub score: f64,
    /// Left-hand file.
    pub left: FileSide,
    /// Right-hand file.
    pub right: FileSide,
}
