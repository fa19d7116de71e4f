use actix_web::{get, post, web, Either, HttpResponse};

use crate::{
    app_state::AppState,
    auth::AuthenticatedUser,
    errors::AppError,
    models::dto::{
        request::{LoginRequest, RegisterRequest},
        response::UserDto,
    },
};

#[post("/register")]
async fn register(
    state: web::Data<AppState>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = state.auth_service.register(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// Accepts either a JSON body or an `application/x-www-form-urlencoded`
/// OAuth2 password form.
#[post("/login")]
async fn login(
    state: web::Data<AppState>,
    request: Either<web::Json<LoginRequest>, web::Form<LoginRequest>>,
) -> Result<HttpResponse, AppError> {
    let request = match request {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    let response = state.auth_service.login(request).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/me")]
async fn me(auth: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(UserDto::from(auth.0)))
}
