use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AdminUser,
    errors::AppError,
    models::dto::{
        request::{CreateTermRequest, UpdateTermRequest},
        response::MessageResponse,
    },
};

#[post("/terms")]
async fn create_term(
    state: web::Data<AppState>,
    request: web::Json<CreateTermRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let term = state.term_service.create_term(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(term))
}

#[put("/terms/{id}")]
async fn update_term(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateTermRequest>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let term = state
        .term_service
        .update_term(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(term))
}

#[delete("/terms/{id}")]
async fn delete_term(
    state: web::Data<AppState>,
    id: web::Path<String>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let term = state.term_service.delete_term(&id).await?;
    Ok(HttpResponse::Ok().json(MessageResponse {
        message: format!("Term '{}' deleted successfully", term.term),
    }))
}

#[get("/users")]
async fn list_users(
    state: web::Data<AppState>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[get("/scores/all")]
async fn all_scores(
    state: web::Data<AppState>,
    _admin: AdminUser,
) -> Result<HttpResponse, AppError> {
    let scores = state.user_service.all_scores().await?;
    Ok(HttpResponse::Ok().json(scores))
}
