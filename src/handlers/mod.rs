pub mod admin_handler;
pub mod auth_handler;
pub mod graphql_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod user_handler;

use actix_web::{error::InternalError, web};

use crate::{auth::AuthMiddleware, errors::AppError};

/// Malformed JSON bodies are reported like any other validation failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            let app_error = AppError::ValidationError(err.to_string());
            InternalError::from_response(err, actix_web::ResponseError::error_response(&app_error))
                .into()
        })
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        let app_error = AppError::ValidationError(err.to_string());
        InternalError::from_response(err, actix_web::ResponseError::error_response(&app_error))
            .into()
    })
}

/// Registers every REST and GraphQL route. `/api` is registered last so the
/// narrower `/api/*` scopes match first.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health_handler::root)
        .service(health_handler::health_check)
        .service(health_handler::health_check_ready)
        .service(graphql_handler::graphql)
        .service(graphql_handler::graphiql)
        .service(
            web::scope("/api/auth")
                .service(auth_handler::register)
                .service(auth_handler::login)
                .service(auth_handler::me),
        )
        .service(
            web::scope("/api/quiz")
                .wrap(AuthMiddleware)
                .service(quiz_handler::random_quiz)
                .service(quiz_handler::check_answer),
        )
        .service(
            web::scope("/api/admin")
                .wrap(AuthMiddleware)
                .service(admin_handler::create_term)
                .service(admin_handler::update_term)
                .service(admin_handler::delete_term)
                .service(admin_handler::list_users)
                .service(admin_handler::all_scores),
        )
        .service(
            web::scope("/api")
                .wrap(AuthMiddleware)
                .service(user_handler::list_terms)
                .service(user_handler::get_term)
                .service(user_handler::save_score)
                .service(user_handler::score_history)
                .service(user_handler::stats),
        );
}
