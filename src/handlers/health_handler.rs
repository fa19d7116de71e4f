use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Tech Vocabulary Builder API is running!",
        "version": env!("CARGO_PKG_VERSION"),
        "features": ["Authentication", "Authorization", "Database Persistence", "GraphQL"],
        "graphiql": "/graphiql"
    }))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

#[get("/health/ready")]
async fn health_check_ready(state: web::Data<AppState>) -> HttpResponse {
    let mongodb = match &state.db {
        Some(db) => match db.health_check().await {
            Ok(()) => "ok",
            Err(e) => {
                log::warn!("Readiness check failed: {}", e);
                "error"
            }
        },
        None => "not_configured",
    };
    let ready = mongodb != "error";

    let response = serde_json::json!({
        "status": if ready { "ready" } else { "not_ready" },
        "version": env!("CARGO_PKG_VERSION"),
        "dependencies": {
            "mongodb": mongodb
        }
    });

    if ready {
        HttpResponse::Ok().json(response)
    } else {
        HttpResponse::ServiceUnavailable().json(response)
    }
}
