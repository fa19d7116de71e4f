use async_graphql::Context;

use crate::{
    errors::{AppError, AppResult},
    models::domain::User,
};

pub fn require_admin(user: &User) -> AppResult<&User> {
    if !user.is_admin() {
        return Err(AppError::Forbidden("Admin access required".to_string()));
    }
    Ok(user)
}

pub fn extract_user_from_context(ctx: &Context<'_>) -> AppResult<User> {
    ctx.data::<User>()
        .cloned()
        .map_err(|_| AppError::Unauthenticated("Authentication required".to_string()))
}

pub fn extract_admin_from_context(ctx: &Context<'_>) -> AppResult<User> {
    let user = extract_user_from_context(ctx)?;
    require_admin(&user)?;
    Ok(user)
}
