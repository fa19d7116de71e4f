use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::{Difficulty, Term, User, UserRole};

#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
pub struct UserDto {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub is_admin: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        UserDto {
            is_admin: user.is_admin(),
            id: user.id,
            username: user.username,
            email: user.email,
            role: user.role,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: UserDto,
}

impl AuthResponse {
    pub fn bearer(access_token: String, user: User) -> Self {
        AuthResponse {
            access_token,
            token_type: "bearer".to_string(),
            user: user.into(),
        }
    }
}

/// A term as shown while it is being quizzed: the answer (`term`) and the
/// `real_world` note are left out on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct QuizQuestion {
    pub id: String,
    pub definition: String,
    pub example: String,
    pub difficulty: Difficulty,
}

impl From<&Term> for QuizQuestion {
    fn from(term: &Term) -> Self {
        QuizQuestion {
            id: term.id.clone(),
            definition: term.definition.clone(),
            example: term.example.clone(),
            difficulty: term.difficulty,
        }
    }
}

#[derive(Debug, Clone, Serialize, SimpleObject)]
pub struct QuizResponse {
    pub questions: Vec<QuizQuestion>,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, SimpleObject)]
pub struct AnswerResult {
    pub correct: bool,
    pub correct_answer: String,
    pub real_world: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, SimpleObject)]
pub struct StatsResponse {
    pub total_users: i64,
    pub total_quizzes: i64,
    pub average_score: f64,
    pub total_questions_answered: i64,
}

#[derive(Debug, Serialize, SimpleObject)]
pub struct MessageResponse {
    pub message: String,
}
