use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::{
    auth::{extract_admin_from_context, extract_user_from_context},
    graphql::helpers::{app_state, parse_id},
    models::{
        domain::{Score, Term},
        dto::{
            request::QuizParams,
            response::{QuizResponse, StatsResponse, UserDto},
        },
    },
};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn me(&self, ctx: &Context<'_>) -> Result<UserDto> {
        extract_user_from_context(ctx).map(UserDto::from).extend()
    }

    async fn terms(&self, ctx: &Context<'_>) -> Result<Vec<Term>> {
        let state = app_state(ctx)?;
        extract_user_from_context(ctx).extend()?;

        state.term_service.list_terms().await.extend()
    }

    async fn term(&self, ctx: &Context<'_>, id: ID) -> Result<Term> {
        let state = app_state(ctx)?;
        extract_user_from_context(ctx).extend()?;

        let id = parse_id(&id).extend()?;
        state.term_service.get_term(&id).await.extend()
    }

    async fn random_quiz(&self, ctx: &Context<'_>, count: Option<u32>) -> Result<QuizResponse> {
        let state = app_state(ctx)?;
        extract_user_from_context(ctx).extend()?;

        state
            .quiz_service
            .random_quiz(QuizParams { count })
            .await
            .extend()
    }

    async fn my_scores(&self, ctx: &Context<'_>) -> Result<Vec<Score>> {
        let state = app_state(ctx)?;
        let user = extract_user_from_context(ctx).extend()?;

        state.quiz_service.score_history(&user).await.extend()
    }

    async fn stats(&self, ctx: &Context<'_>) -> Result<StatsResponse> {
        let state = app_state(ctx)?;
        extract_user_from_context(ctx).extend()?;

        state.user_service.stats().await.extend()
    }

    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<UserDto>> {
        let state = app_state(ctx)?;
        extract_admin_from_context(ctx).extend()?;

        state.user_service.list_users().await.extend()
    }

    async fn all_scores(&self, ctx: &Context<'_>) -> Result<Vec<Score>> {
        let state = app_state(ctx)?;
        extract_admin_from_context(ctx).extend()?;

        state.user_service.all_scores().await.extend()
    }
}
