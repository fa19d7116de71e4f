pub mod score_repository;
pub mod term_repository;
pub mod user_repository;

pub use score_repository::{MongoScoreRepository, ScoreRepository};
pub use term_repository::{MongoTermRepository, TermRepository};
pub use user_repository::{MongoUserRepository, UserRepository};

#[cfg(test)]
pub use score_repository::MockScoreRepository;
#[cfg(test)]
pub use term_repository::MockTermRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
