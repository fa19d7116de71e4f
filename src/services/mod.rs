pub mod auth_service;
pub mod quiz_service;
pub mod term_service;
pub mod user_service;

pub use auth_service::AuthService;
pub use quiz_service::QuizService;
pub use term_service::TermService;
pub use user_service::UserService;
