use async_graphql::{Enum, SimpleObject};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::dto::request::{CreateTermRequest, UpdateTermRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize, Enum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, SimpleObject)]
pub struct Term {
    pub id: String,
    pub term: String, // unique display name, the quiz answer
    pub definition: String,
    pub example: String,
    pub real_world: String,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Term {
    pub fn new(
        term: &str,
        definition: &str,
        example: &str,
        real_world: &str,
        difficulty: Difficulty,
    ) -> Self {
        let now = Utc::now();
        Term {
            id: Uuid::new_v4().to_string(),
            term: term.to_string(),
            definition: definition.to_string(),
            example: example.to_string(),
            real_world: real_world.to_string(),
            difficulty,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_request(request: CreateTermRequest) -> Self {
        let now = Utc::now();
        Term {
            id: Uuid::new_v4().to_string(),
            term: request.term,
            definition: request.definition,
            example: request.example,
            real_world: request.real_world,
            difficulty: request.difficulty,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies only the fields present in `update` and bumps `updated_at`.
    pub fn apply_update(&mut self, update: UpdateTermRequest) {
        if let Some(term) = update.term {
            self.term = term;
        }
        if let Some(definition) = update.definition {
            self.definition = definition;
        }
        if let Some(example) = update.example {
            self.example = example;
        }
        if let Some(real_world) = update.real_world {
            self.real_world = real_world;
        }
        if let Some(difficulty) = update.difficulty {
            self.difficulty = difficulty;
        }
        self.updated_at = Utc::now();
    }
}
