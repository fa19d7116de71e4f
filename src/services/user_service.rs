use std::sync::Arc;

use crate::{
    errors::AppResult,
    models::{
        domain::{score::round_to_hundredths, Score},
        dto::response::{StatsResponse, UserDto},
    },
    repositories::{ScoreRepository, UserRepository},
};

/// Account listing and the aggregate statistics.
pub struct UserService {
    users: Arc<dyn UserRepository>,
    scores: Arc<dyn ScoreRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>, scores: Arc<dyn ScoreRepository>) -> Self {
        Self { users, scores }
    }

    pub async fn list_users(&self) -> AppResult<Vec<UserDto>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }

    pub async fn all_scores(&self) -> AppResult<Vec<Score>> {
        self.scores.find_all().await
    }

    pub async fn stats(&self) -> AppResult<StatsResponse> {
        let scores = self.scores.find_all().await?;

        if scores.is_empty() {
            return Ok(StatsResponse {
                total_users: 0,
                total_quizzes: 0,
                average_score: 0.0,
                total_questions_answered: 0,
            });
        }

        let total_users = self.users.count().await? as i64;
        let total_quizzes = scores.len() as i64;
        let percentage_sum: f64 = scores.iter().map(|s| s.percentage).sum();
        let total_questions_answered = scores.iter().map(|s| i64::from(s.total)).sum();

        Ok(StatsResponse {
            total_users,
            total_quizzes,
            average_score: round_to_hundredths(percentage_sum / total_quizzes as f64),
            total_questions_answered,
        })
    }
}
