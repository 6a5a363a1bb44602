//! Server configuration, read once from the environment at startup.

use std::env;

const DEFAULT_JWT_SECRET: &str = "dompetku-secret-key";

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub mongo_uri: String,
    pub mongo_db: String,
    pub jwt_secret: String,
}

impl Config {
    /// Loads configuration from the environment.
    ///
    /// Call after `dotenvy::dotenv()` and tracing setup so `.env` values are
    /// visible and the missing-secret warning is not lost.
    pub fn from_env() -> Self {
        Config {
            listen_addr: env::var("DOMPETKU_LISTEN_ADDR")
                .unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            mongo_uri: env::var("MONGO_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db: env::var("MONGO_DB").unwrap_or_else(|_| "dompetku_db".to_string()),
            jwt_secret: env::var("JWT_SECRET").unwrap_or_else(|_| {
                tracing::warn!(
                    "JWT_SECRET is not set; using the built-in development secret. \
                     Set JWT_SECRET before deploying."
                );
                DEFAULT_JWT_SECRET.to_string()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_secret_falls_back_to_default_when_unset() {
        env::remove_var("JWT_SECRET");
        assert_eq!(Config::from_env().jwt_secret, DEFAULT_JWT_SECRET);

        env::set_var("JWT_SECRET", "super-secret");
        assert_eq!(Config::from_env().jwt_secret, "super-secret");
        env::remove_var("JWT_SECRET");
    }
}
