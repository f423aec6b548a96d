//! Driving port for user-facing profile reads.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading the authenticated user's profile.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Fetch the profile of the given user.
    async fn current_user(&self, user_id: UserId) -> Result<User, Error>;
}
