use async_graphql::InputObject;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::domain::Difficulty;

static USERNAME_REGEX: Lazy<regex::Regex> = Lazy::new(|| {
    regex::Regex::new(r"^[a-zA-Z0-9_.-]+$").expect("USERNAME_REGEX is a valid regex pattern")
});

pub const DEFAULT_QUIZ_SIZE: usize = 5;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, InputObject)]
pub struct RegisterRequest {
    #[validate(
        length(min = 3, max = 50),
        regex(
            path = *USERNAME_REGEX,
            message = "Username may only contain letters, digits, '_', '.' and '-'"
        )
    )]
    pub username: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    // No upper bound: the password is digested before bcrypt sees it.
    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, InputObject)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, InputObject)]
pub struct CreateTermRequest {
    #[validate(length(min = 1, max = 100))]
    pub term: String,

    #[validate(length(min = 1, max = 2000))]
    pub definition: String,

    #[validate(length(min = 1, max = 2000))]
    pub example: String,

    #[validate(length(min = 1, max = 2000))]
    pub real_world: String,

    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, InputObject)]
pub struct UpdateTermRequest {
    #[validate(length(min = 1, max = 100))]
    pub term: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub definition: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub example: Option<String>,

    #[validate(length(min = 1, max = 2000))]
    pub real_world: Option<String>,

    pub difficulty: Option<Difficulty>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, InputObject)]
pub struct CheckAnswerRequest {
    #[validate(length(min = 1))]
    pub term_id: String,

    pub user_answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, InputObject)]
#[validate(schema(function = "validate_score_counts"))]
pub struct SaveScoreRequest {
    #[validate(range(min = 0))]
    pub correct: i32,

    #[validate(range(min = 0))]
    pub total: i32,
}

fn validate_score_counts(request: &SaveScoreRequest) -> Result<(), ValidationError> {
    if request.correct > request.total {
        let mut error = ValidationError::new("correct_exceeds_total");
        error.message = Some("correct cannot be greater than total".into());
        return Err(error);
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct QuizParams {
    /// Counts above the catalog size return the whole catalog.
    #[validate(range(min = 1))]
    pub count: Option<u32>,
}

impl QuizParams {
    pub fn count(&self) -> usize {
        self.count.map(|c| c as usize).unwrap_or(DEFAULT_QUIZ_SIZE)
    }
}
