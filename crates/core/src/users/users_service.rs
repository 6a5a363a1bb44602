use argon2::password_hash::{
    rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString,
};
use argon2::Argon2;
use log::debug;
use std::sync::Arc;

use super::users_model::{
    Credentials, PasswordChange, ProfileUpdate, RegisterUser, User, UserProfile,
};
use super::users_traits::{NewUserRecord, UserRepositoryTrait, UserServiceTrait};
use crate::errors::{Error, Result, ValidationError};

const MIN_NAMA_LEN: usize = 2;
const MIN_USERNAME_LEN: usize = 4;
const MIN_PASSWORD_LEN: usize = 6;

/// Service for account registration, authentication, and profile management.
pub struct UserService {
    repository: Arc<dyn UserRepositoryTrait>,
}

impl UserService {
    /// Creates a new UserService instance
    pub fn new(repository: Arc<dyn UserRepositoryTrait>) -> Self {
        Self { repository }
    }

    fn hash_password(password: &str) -> Result<String> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| Error::PasswordHash(e.to_string()))
    }

    fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(stored_hash).map_err(|e| Error::PasswordHash(e.to_string()))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }

    async fn get_user(&self, user_id: &str) -> Result<User> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| Error::NotFound("User".to_string()))
    }
}

#[async_trait::async_trait]
impl UserServiceTrait for UserService {
    async fn register(&self, input: RegisterUser) -> Result<UserProfile> {
        if input.nama.chars().count() < MIN_NAMA_LEN {
            return Err(ValidationError::InvalidInput(
                "Nama minimal 2 karakter".to_string(),
            )
            .into());
        }
        if input.username.chars().count() < MIN_USERNAME_LEN {
            return Err(ValidationError::InvalidInput(
                "Username minimal 4 karakter".to_string(),
            )
            .into());
        }
        if input.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::InvalidInput(
                "Password minimal 6 karakter".to_string(),
            )
            .into());
        }

        if self
            .repository
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(Error::Conflict("Username sudah digunakan".to_string()));
        }

        debug!("Registering user {}", input.username);
        let password_hash = Self::hash_password(&input.password)?;
        let user = self
            .repository
            .insert(NewUserRecord {
                username: input.username,
                password_hash,
                nama: input.nama,
            })
            .await?;
        Ok(user.into())
    }

    async fn authenticate(&self, credentials: Credentials) -> Result<User> {
        // The same error for unknown usernames and wrong passwords, so the
        // response does not reveal which usernames exist.
        let invalid = || Error::Unauthorized("Username atau password salah".to_string());

        let user = self
            .repository
            .find_by_username(&credentials.username)
            .await?
            .ok_or_else(invalid)?;

        if !Self::verify_password(&credentials.password, &user.password_hash)? {
            return Err(invalid());
        }
        Ok(user)
    }

    async fn get_profile(&self, user_id: &str) -> Result<UserProfile> {
        Ok(self.get_user(user_id).await?.into())
    }

    async fn update_profile(&self, user_id: &str, update: ProfileUpdate) -> Result<UserProfile> {
        self.get_user(user_id).await?;
        let user = self
            .repository
            .update_profile(
                user_id,
                update.nama.filter(|n| !n.is_empty()),
                update.foto.filter(|f| !f.is_empty()),
            )
            .await?;
        Ok(user.into())
    }

    async fn change_password(&self, user_id: &str, change: PasswordChange) -> Result<()> {
        if change.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::InvalidInput(
                "Password minimal 6 karakter".to_string(),
            )
            .into());
        }

        let user = self.get_user(user_id).await?;
        if !Self::verify_password(&change.old_password, &user.password_hash)? {
            return Err(ValidationError::InvalidInput(
                "Password lama salah".to_string(),
            )
            .into());
        }

        let password_hash = Self::hash_password(&change.new_password)?;
        self.repository
            .update_password(user_id, &password_hash)
            .await
    }
}
