//! User repository and service traits.

use async_trait::async_trait;

use super::users_model::{
    Credentials, PasswordChange, ProfileUpdate, RegisterUser, User, UserProfile,
};
use crate::errors::Result;

/// Validated content for a new user record.
#[derive(Debug, Clone)]
pub struct NewUserRecord {
    pub username: String,
    pub password_hash: String,
    pub nama: String,
}

/// Trait defining the contract for User repository operations.
#[async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    /// Looks a user up by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Looks a user up by id.
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>>;

    /// Persists a new user, assigning id and timestamps.
    async fn insert(&self, record: NewUserRecord) -> Result<User>;

    /// Updates display name and/or photo URL.
    async fn update_profile(
        &self,
        user_id: &str,
        nama: Option<String>,
        foto: Option<String>,
    ) -> Result<User>;

    /// Replaces the stored password hash.
    async fn update_password(&self, user_id: &str, password_hash: &str) -> Result<()>;
}

/// Trait defining the contract for User service operations.
///
/// The service owns input validation and password hashing; it never sees
/// or produces bearer tokens (that is the HTTP layer's concern).
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    /// Registers a new user after checking username uniqueness.
    async fn register(&self, input: RegisterUser) -> Result<UserProfile>;

    /// Verifies credentials and returns the matching user.
    async fn authenticate(&self, credentials: Credentials) -> Result<User>;

    /// Retrieves the user's public profile.
    async fn get_profile(&self, user_id: &str) -> Result<UserProfile>;

    /// Updates display name and/or photo URL.
    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<UserProfile>;

    /// Changes the password after verifying the old one.
    async fn change_password(&self, user_id: &str, change: PasswordChange) -> Result<()>;
}
