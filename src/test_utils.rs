use crate::models::domain::{Difficulty, Term, User, UserRole};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// Creates a standard test user
    pub fn test_user() -> User {
        User::new("testuser", "test@example.com", "hash", UserRole::User)
    }

    pub fn test_admin() -> User {
        User::new("testadmin", "admin@example.com", "hash", UserRole::Admin)
    }

    /// Creates a test user with custom username
    pub fn test_user_with_username(username: &str) -> User {
        User::new(
            username,
            &format!("{}@example.com", username),
            "hash",
            UserRole::User,
        )
    }

    pub fn test_terms() -> Vec<Term> {
        vec![
            Term::new("API", "Interface", "GET /users", "Stripe", Difficulty::Easy),
            Term::new("JWT", "Token", "eyJ...", "Login", Difficulty::Medium),
            Term::new("Kubernetes", "Orchestrator", "kubectl", "Scaling", Difficulty::Hard),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::quiz_service::draw_questions;

    #[test]
    fn test_fixtures_test_user() {
        let user = test_user();
        assert_eq!(user.username, "testuser");
        assert!(!user.is_admin());
        assert!(test_admin().is_admin());
    }

    #[test]
    fn test_fixtures_test_user_with_username() {
        let user = test_user_with_username("custom");
        assert_eq!(user.username, "custom");
        assert_eq!(user.email, "custom@example.com");
    }

    #[test]
    fn test_fixture_terms_drive_a_quiz() {
        let terms = test_terms();
        let questions = draw_questions(&terms, 5).unwrap();
        assert_eq!(questions.len(), terms.len());
    }
}
