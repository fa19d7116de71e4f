use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::SaveScoreRequest,
};

#[get("/terms")]
async fn list_terms(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let terms = state.term_service.list_terms().await?;
    Ok(HttpResponse::Ok().json(terms))
}

#[get("/terms/{id}")]
async fn get_term(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let term = state.term_service.get_term(&id).await?;
    Ok(HttpResponse::Ok().json(term))
}

#[post("/scores")]
async fn save_score(
    state: web::Data<AppState>,
    request: web::Json<SaveScoreRequest>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let score = state
        .quiz_service
        .record_score(&auth.0, request.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(score))
}

#[get("/scores/my-history")]
async fn score_history(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let scores = state.quiz_service.score_history(&auth.0).await?;
    Ok(HttpResponse::Ok().json(scores))
}

#[get("/stats")]
async fn stats(
    state: web::Data<AppState>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let stats = state.user_service.stats().await?;
    Ok(HttpResponse::Ok().json(stats))
}
