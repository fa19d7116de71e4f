#![allow(dead_code)]

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use tokio::sync::RwLock;

use techvocab_server::{
    app_state::AppState,
    config::Config,
    errors::{AppError, AppResult},
    models::domain::{Score, Term, User},
    repositories::{ScoreRepository, TermRepository, UserRepository},
};

/// Keyed by username. Mirrors the unique indexes on username and email.
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) || users.values().any(|u| u.email == user.email) {
            return Err(AppError::DuplicateIdentity(
                "Username or email already exists".to_string(),
            ));
        }
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().await;
        let mut all: Vec<User> = users.values().cloned().collect();
        all.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(all)
    }

    async fn count(&self) -> AppResult<u64> {
        Ok(self.users.read().await.len() as u64)
    }
}

/// Keyed by id. Mirrors the unique index on the term name.
#[derive(Default)]
pub struct InMemoryTermRepository {
    terms: Arc<RwLock<HashMap<String, Term>>>,
}

#[async_trait]
impl TermRepository for InMemoryTermRepository {
    async fn create(&self, term: Term) -> AppResult<Term> {
        let mut terms = self.terms.write().await;
        if terms.values().any(|t| t.term == term.term) {
            return Err(AppError::AlreadyExists("Term already exists".to_string()));
        }
        terms.insert(term.id.clone(), term.clone());
        Ok(term)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Term>> {
        Ok(self.terms.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Term>> {
        let terms = self.terms.read().await;
        Ok(terms.values().find(|t| t.term == name).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Term>> {
        let terms = self.terms.read().await;
        let mut all: Vec<Term> = terms.values().cloned().collect();
        all.sort_by(|a, b| a.term.cmp(&b.term));
        Ok(all)
    }

    async fn update(&self, term: Term) -> AppResult<Term> {
        let mut terms = self.terms.write().await;
        if !terms.contains_key(&term.id) {
            return Err(AppError::NotFound(format!(
                "Term with id '{}' not found",
                term.id
            )));
        }
        if terms
            .values()
            .any(|t| t.term == term.term && t.id != term.id)
        {
            return Err(AppError::AlreadyExists("Term already exists".to_string()));
        }
        terms.insert(term.id.clone(), term.clone());
        Ok(term)
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        match self.terms.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(format!("Term with id '{}' not found", id))),
        }
    }
}

#[derive(Default)]
pub struct InMemoryScoreRepository {
    scores: Arc<RwLock<Vec<Score>>>,
}

fn newest_first(mut scores: Vec<Score>) -> Vec<Score> {
    scores.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    scores
}

#[async_trait]
impl ScoreRepository for InMemoryScoreRepository {
    async fn create(&self, score: Score) -> AppResult<Score> {
        self.scores.write().await.push(score.clone());
        Ok(score)
    }

    async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Score>> {
        let scores = self.scores.read().await;
        Ok(newest_first(
            scores.iter().filter(|s| s.user_id == user_id).cloned().collect(),
        ))
    }

    async fn find_all(&self) -> AppResult<Vec<Score>> {
        Ok(newest_first(self.scores.read().await.clone()))
    }
}

/// Fast bcrypt, short fixed secret, no seeding at startup.
pub fn test_config() -> Config {
    Config {
        bcrypt_cost: 4,
        jwt_expiration_hours: 1,
        seed_on_startup: false,
        ..Config::from_env()
    }
}

pub fn in_memory_state() -> AppState {
    AppState::from_repositories(
        test_config(),
        Arc::new(InMemoryUserRepository::default()),
        Arc::new(InMemoryTermRepository::default()),
        Arc::new(InMemoryScoreRepository::default()),
    )
}
