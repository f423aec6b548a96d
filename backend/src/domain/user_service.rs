//! Profile lookups for authenticated users.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserQuery, UserRepository};
use crate::domain::{Error, User, UserId};

/// Title of the error returned when the session names an unknown user.
pub const USER_NOT_FOUND: &str = "user not found";

/// Domain service implementing [`UserQuery`] on top of a user repository.
#[derive(Clone)]
pub struct UserProfileService<U> {
    users: Arc<U>,
}

impl<U> UserProfileService<U> {
    /// Create a new service over the given repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UserQuery for UserProfileService<U>
where
    U: UserRepository,
{
    async fn current_user(&self, user_id: UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(|err| Error::internal(format!("user store failure: {err}")))?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}
