//! User data model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable user identifier as stored by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    /// Raw integer value.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Closed set of roles a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Creates experiments and reviews results.
    Requester,
    /// Answers assigned file pairs.
    Worker,
}

impl Role {
    /// Canonical name used on the wire and in storage.
    ///
    /// # Examples
    /// ```
    /// use annotation_backend::domain::Role;
    ///
    /// assert_eq!(Role::Requester.as_str(), "requester");
    /// ```
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Requester => "requester",
            Self::Worker => "worker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a stored role name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "requester" => Ok(Self::Requester),
            "worker" => Ok(Self::Worker),
            other => Err(UnknownRole(other.to_owned())),
        }
    }
}

/// Application user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Stable identifier.
    pub id: UserId,
    /// Login handle from the identity provider.
    pub login: String,
    /// Display name.
    pub username: String,
    /// Avatar image reference.
    pub avatar_url: String,
    /// Role held by the user.
    pub role: Role,
}
