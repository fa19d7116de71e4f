use std::sync::Arc;

use crate::{
    auth::{JwtService, PasswordHasher},
    config::Config,
    db::Database,
    errors::AppResult,
    repositories::{
        MongoScoreRepository, MongoTermRepository, MongoUserRepository, ScoreRepository,
        TermRepository, UserRepository,
    },
    services::{AuthService, QuizService, TermService, UserService},
};

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub term_service: Arc<TermService>,
    pub quiz_service: Arc<QuizService>,
    pub user_service: Arc<UserService>,
    pub config: Arc<Config>,
    /// `None` when the state was built over non-Mongo repositories.
    pub db: Option<Database>,
}

impl AppState {
    pub async fn new(config: Config) -> AppResult<Self> {
        let db = Database::connect(&config).await?;

        let user_repository = Arc::new(MongoUserRepository::new(&db));
        user_repository.ensure_indexes().await?;

        let term_repository = Arc::new(MongoTermRepository::new(&db));
        term_repository.ensure_indexes().await?;

        let score_repository = Arc::new(MongoScoreRepository::new(&db));
        score_repository.ensure_indexes().await?;

        let mut state =
            Self::from_repositories(config, user_repository, term_repository, score_repository);
        state.db = Some(db);
        Ok(state)
    }

    pub fn from_repositories(
        config: Config,
        users: Arc<dyn UserRepository>,
        terms: Arc<dyn TermRepository>,
        scores: Arc<dyn ScoreRepository>,
    ) -> Self {
        let jwt = JwtService::new(&config.jwt_secret, config.jwt_expiration_hours);
        let hasher = PasswordHasher::new(config.bcrypt_cost);

        let auth_service = Arc::new(AuthService::new(users.clone(), jwt, hasher));
        let term_service = Arc::new(TermService::new(terms.clone()));
        let quiz_service = Arc::new(QuizService::new(terms, scores.clone()));
        let user_service = Arc::new(UserService::new(users, scores));

        Self {
            auth_service,
            term_service,
            quiz_service,
            user_service,
            config: Arc::new(config),
            db: None,
        }
    }
}
