//! User domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Domain model representing a user account.
///
/// The password hash never leaves the backend; outward-facing responses use
/// [`UserProfile`]. Deserialization happens on storage documents, never on
/// this type.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: String,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub nama: String,
    pub foto: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Public view of a user, safe to serialize in responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: String,
    pub nama: String,
    pub foto: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nama: user.nama,
            foto: user.foto,
            created_at: user.created_at,
        }
    }
}

/// Input model for registering a new user.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub nama: String,
    pub username: String,
    pub password: String,
}

/// Input model for logging in.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Input model for updating the profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileUpdate {
    pub nama: Option<String>,
    pub foto: Option<String>,
}

/// Input model for changing the password.
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}
