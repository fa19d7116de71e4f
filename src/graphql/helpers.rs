use async_graphql::{Context, ErrorExtensions, ID};

use crate::{
    app_state::AppState,
    errors::{AppError, AppResult},
};

pub fn app_state<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a AppState> {
    ctx.data::<AppState>()
        .map_err(|_| AppError::InternalError("Application state not configured".into()).extend())
}

/// Term ids are opaque strings; only an empty id is rejected up front.
pub fn parse_id(id: &ID) -> AppResult<String> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::ValidationError("Id cannot be empty".to_string()));
    }
    Ok(id.to_string())
}
