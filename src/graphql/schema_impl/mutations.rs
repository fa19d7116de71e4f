use async_graphql::{Context, Object, Result, ResultExt, ID};

use crate::{
    auth::{extract_admin_from_context, extract_user_from_context},
    graphql::helpers::{app_state, parse_id},
    models::{
        domain::{Score, Term},
        dto::{
            request::{
                CheckAnswerRequest, CreateTermRequest, LoginRequest, RegisterRequest,
                SaveScoreRequest, UpdateTermRequest,
            },
            response::{AnswerResult, AuthResponse, MessageResponse},
        },
    },
};

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn register(&self, ctx: &Context<'_>, input: RegisterRequest) -> Result<AuthResponse> {
        let state = app_state(ctx)?;
        state.auth_service.register(input).await.extend()
    }

    async fn login(&self, ctx: &Context<'_>, input: LoginRequest) -> Result<AuthResponse> {
        let state = app_state(ctx)?;
        state.auth_service.login(input).await.extend()
    }

    async fn check_answer(
        &self,
        ctx: &Context<'_>,
        input: CheckAnswerRequest,
    ) -> Result<AnswerResult> {
        let state = app_state(ctx)?;
        extract_user_from_context(ctx).extend()?;

        state.quiz_service.check_answer(input).await.extend()
    }

    async fn save_score(&self, ctx: &Context<'_>, input: SaveScoreRequest) -> Result<Score> {
        let state = app_state(ctx)?;
        let user = extract_user_from_context(ctx).extend()?;

        state.quiz_service.record_score(&user, input).await.extend()
    }

    async fn create_term(&self, ctx: &Context<'_>, input: CreateTermRequest) -> Result<Term> {
        let state = app_state(ctx)?;
        extract_admin_from_context(ctx).extend()?;

        state.term_service.create_term(input).await.extend()
    }

    async fn update_term(
        &self,
        ctx: &Context<'_>,
        id: ID,
        input: UpdateTermRequest,
    ) -> Result<Term> {
        let state = app_state(ctx)?;
        extract_admin_from_context(ctx).extend()?;

        let id = parse_id(&id).extend()?;
        state.term_service.update_term(&id, input).await.extend()
    }

    async fn delete_term(&self, ctx: &Context<'_>, id: ID) -> Result<MessageResponse> {
        let state = app_state(ctx)?;
        extract_admin_from_context(ctx).extend()?;

        let id = parse_id(&id).extend()?;
        let term = state.term_service.delete_term(&id).await.extend()?;
        Ok(MessageResponse {
            message: format!("Term '{}' deleted successfully", term.term),
        })
    }
}
