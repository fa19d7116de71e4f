use async_graphql::SimpleObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One submitted quiz attempt. Immutable once stored.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, SimpleObject)]
pub struct Score {
    pub id: String,
    pub user_id: String,
    pub correct: i32,
    pub total: i32,
    pub percentage: f64,
    pub created_at: DateTime<Utc>,
}

impl Score {
    pub fn new(user_id: &str, correct: i32, total: i32) -> Self {
        Score {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            correct,
            total,
            percentage: Self::percentage_of(correct, total),
            created_at: Utc::now(),
        }
    }

    /// `correct / total * 100` rounded to two decimals, `0` for an empty quiz.
    pub fn percentage_of(correct: i32, total: i32) -> f64 {
        if total <= 0 {
            return 0.0;
        }
        round_to_hundredths(f64::from(correct) / f64::from(total) * 100.0)
    }
}

pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
