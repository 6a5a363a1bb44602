//! Tests for user models.

#[cfg(test)]
mod tests {
    use crate::users::{User, UserProfile};
    use chrono::Utc;

    fn create_test_user() -> User {
        User {
            id: "user-1".to_string(),
            username: "budi1234".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$abc$def".to_string(),
            nama: "Budi".to_string(),
            foto: String::new(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let json = serde_json::to_value(create_test_user()).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "budi1234");
    }

    #[test]
    fn test_profile_view_drops_sensitive_fields() {
        let profile = UserProfile::from(create_test_user());
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("updated_at").is_none());
        assert_eq!(json["nama"], "Budi");
    }
}
