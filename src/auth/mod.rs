pub mod claims;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod utils;

pub use claims::Claims;
pub use jwt::JwtService;
pub use middleware::{bearer_token, AdminUser, AuthMiddleware, AuthenticatedUser};
pub use password::PasswordHasher;
pub use utils::{extract_admin_from_context, extract_user_from_context, require_admin};
