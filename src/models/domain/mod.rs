pub mod score;
pub mod term;
pub mod user;
pub use score::Score;
pub use term::{Difficulty, Term};
pub use user::{User, UserRole};
