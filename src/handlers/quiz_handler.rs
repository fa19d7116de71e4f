use actix_web::{get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::request::{CheckAnswerRequest, QuizParams},
};

#[get("/random")]
async fn random_quiz(
    state: web::Data<AppState>,
    query: web::Query<QuizParams>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let quiz = state.quiz_service.random_quiz(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(quiz))
}

#[post("/check")]
async fn check_answer(
    state: web::Data<AppState>,
    request: web::Json<CheckAnswerRequest>,
    _auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let result = state
        .quiz_service
        .check_answer(request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}
