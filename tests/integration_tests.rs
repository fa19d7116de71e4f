mod common;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    http::{header, StatusCode},
    test, web, App,
};
use secrecy::ExposeSecret;
use serde_json::{json, Value};

use techvocab_server::{
    app_state::AppState,
    graphql::create_schema,
    handlers::{configure_routes, json_config, query_config},
    middleware::{RequestIdMiddleware, REQUEST_ID_HEADER},
    seed::seed_database,
};

use common::in_memory_state;

fn build_app(
    state: AppState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let schema = create_schema(state.clone());
    App::new()
        .app_data(web::Data::new(state))
        .app_data(web::Data::new(schema))
        .app_data(json_config())
        .app_data(query_config())
        .wrap(RequestIdMiddleware)
        .configure(configure_routes)
}

fn bearer(token: &str) -> (header::HeaderName, String) {
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

async fn seeded_state() -> AppState {
    let state = in_memory_state();
    assert!(seed_database(&state).await.unwrap());
    state
}

macro_rules! login {
    ($app:expr, $username:expr, $password:expr) => {{
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "username": $username, "password": $password }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&$app, req).await;
        body["access_token"].as_str().unwrap().to_string()
    }};
}

#[actix_web::test]
async fn test_register_quiz_and_score_flow() {
    let state = seeded_state().await;
    let app = test::init_service(build_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "alice", "email": "alice@x.com", "password": "s3cret!" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["token_type"], "bearer");
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["is_admin"], false);
    assert!(body["user"].get("password_hash").is_none());

    let token = login!(app, "alice", "s3cret!");

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&token))
        .to_request();
    let me: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(me["username"], "alice");
    assert_eq!(me["role"], "user");

    let req = test::TestRequest::get()
        .uri("/api/quiz/random?count=5")
        .insert_header(bearer(&token))
        .to_request();
    let quiz: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(quiz["total"], 5);
    let questions = quiz["questions"].as_array().unwrap();
    assert_eq!(questions.len(), 5);
    for question in questions {
        assert!(question.get("term").is_none());
        assert!(question.get("real_world").is_none());
        assert!(question["definition"].is_string());
    }

    let req = test::TestRequest::get()
        .uri("/api/terms")
        .insert_header(bearer(&token))
        .to_request();
    let terms: Value = test::call_and_read_body_json(&app, req).await;
    let api_id = terms
        .as_array()
        .unwrap()
        .iter()
        .find(|t| t["term"] == "API")
        .and_then(|t| t["id"].as_str())
        .unwrap()
        .to_string();

    let req = test::TestRequest::post()
        .uri("/api/quiz/check")
        .insert_header(bearer(&token))
        .set_json(json!({ "term_id": api_id, "user_answer": " api " }))
        .to_request();
    let result: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(result["correct"], true);
    assert_eq!(result["correct_answer"], "API");
    assert!(result["real_world"].as_str().unwrap().contains("Twitter"));

    let req = test::TestRequest::post()
        .uri("/api/scores")
        .insert_header(bearer(&token))
        .set_json(json!({ "correct": 8, "total": 10 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let score: Value = test::read_body_json(resp).await;
    assert_eq!(score["percentage"], 80.0);

    let req = test::TestRequest::get()
        .uri("/api/scores/my-history")
        .insert_header(bearer(&token))
        .to_request();
    let history: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(history.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/stats")
        .insert_header(bearer(&token))
        .to_request();
    let stats: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats["total_users"], 3);
    assert_eq!(stats["total_quizzes"], 1);
    assert_eq!(stats["average_score"], 80.0);
    assert_eq!(stats["total_questions_answered"], 10);
}

#[actix_web::test]
async fn test_missing_bearer_is_unauthenticated() {
    let app = test::init_service(build_app(in_memory_state())).await;

    for uri in ["/api/quiz/random", "/api/terms", "/api/admin/users", "/api/auth/me"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{}", uri);
        assert_eq!(resp.headers().get(header::WWW_AUTHENTICATE).unwrap(), "Bearer");
        assert!(resp.headers().contains_key(REQUEST_ID_HEADER));

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "UNAUTHENTICATED");
    }
}

#[actix_web::test]
async fn test_garbage_token_is_unauthenticated() {
    let app = test::init_service(build_app(in_memory_state())).await;

    let req = test::TestRequest::get()
        .uri("/api/terms")
        .insert_header(bearer("not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_non_admin_is_forbidden_on_admin_routes() {
    let state = seeded_state().await;
    let user_password = state.config.seed_user_password.expose_secret().to_string();
    let app = test::init_service(build_app(state)).await;

    let token = login!(app, "user", user_password);

    let req = test::TestRequest::get()
        .uri("/api/admin/users")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "FORBIDDEN");
    assert!(body["error"].as_str().unwrap().contains("Admin access required"));
}

#[actix_web::test]
async fn test_admin_term_management() {
    let state = seeded_state().await;
    let admin_password = state.config.seed_admin_password.expose_secret().to_string();
    let app = test::init_service(build_app(state)).await;

    let token = login!(app, "admin", admin_password);
    let new_term = json!({
        "term": "gRPC",
        "definition": "A high-performance RPC framework",
        "example": "service Greeter { rpc SayHello (HelloRequest) returns (HelloReply); }",
        "real_world": "Used for service-to-service calls",
        "difficulty": "hard"
    });

    let req = test::TestRequest::post()
        .uri("/api/admin/terms")
        .insert_header(bearer(&token))
        .set_json(&new_term)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri("/api/admin/terms")
        .insert_header(bearer(&token))
        .set_json(&new_term)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/terms/{}", id))
        .insert_header(bearer(&token))
        .set_json(json!({ "difficulty": "medium" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(updated["difficulty"], "medium");
    assert_eq!(updated["term"], "gRPC");
    assert_eq!(updated["definition"], "A high-performance RPC framework");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/terms/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let deleted: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(deleted["message"], "Term 'gRPC' deleted successfully");

    let req = test::TestRequest::get()
        .uri(&format!("/api/terms/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_admin_cannot_remove_accounts() {
    let state = seeded_state().await;
    let admin_password = state.config.seed_admin_password.expose_secret().to_string();
    let user_password = state.config.seed_user_password.expose_secret().to_string();
    let app = test::init_service(build_app(state)).await;

    let user_token = login!(app, "user", user_password);
    let req = test::TestRequest::post()
        .uri("/api/scores")
        .insert_header(bearer(&user_token))
        .set_json(json!({ "correct": 3, "total": 4 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let admin_token = login!(app, "admin", admin_password);
    let req = test::TestRequest::delete()
        .uri("/api/admin/users/user")
        .insert_header(bearer(&admin_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri("/api/admin/users")
        .insert_header(bearer(&admin_token))
        .to_request();
    let users: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(users.as_array().unwrap().len(), 2);

    let req = test::TestRequest::get()
        .uri("/api/admin/scores/all")
        .insert_header(bearer(&admin_token))
        .to_request();
    let scores: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(scores.as_array().unwrap().len(), 1);

    let req = test::TestRequest::get()
        .uri("/api/auth/me")
        .insert_header(bearer(&user_token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri("/graphql")
        .insert_header(bearer(&admin_token))
        .set_json(json!({ "query": r#"mutation { deleteUser(username: "user") { message } }"# }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert!(body["errors"].as_array().is_some_and(|errors| !errors.is_empty()));
}

#[actix_web::test]
async fn test_duplicate_registration_and_bad_login() {
    let app = test::init_service(build_app(in_memory_state())).await;
    let alice = json!({ "username": "alice", "email": "alice@x.com", "password": "pw" });

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(&alice)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "alice", "email": "other@x.com", "password": "pw" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "DUPLICATE_IDENTITY");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({ "username": "alice", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "INVALID_CREDENTIALS");

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_form([("username", "alice"), ("password", "pw"), ("grant_type", "password")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_invalid_input_is_rejected() {
    let state = seeded_state().await;
    let user_password = state.config.seed_user_password.expose_secret().to_string();
    let app = test::init_service(build_app(state)).await;
    let token = login!(app, "user", user_password);

    for uri in ["/api/quiz/random?count=0", "/api/quiz/random?count=abc"] {
        let req = test::TestRequest::get()
            .uri(uri)
            .insert_header(bearer(&token))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{}", uri);
    }

    let req = test::TestRequest::get()
        .uri("/api/quiz/random?count=51")
        .insert_header(bearer(&token))
        .to_request();
    let quiz: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(quiz["total"], 12);
    assert_eq!(quiz["questions"].as_array().unwrap().len(), 12);

    let req = test::TestRequest::post()
        .uri("/api/scores")
        .insert_header(bearer(&token))
        .set_json(json!({ "correct": 11, "total": 10 }))
        .to_request();
    assert_eq!(
        test::call_service(&app, req).await.status(),
        StatusCode::BAD_REQUEST
    );

    let req = test::TestRequest::post()
        .uri("/api/quiz/check")
        .insert_header(bearer(&token))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[actix_web::test]
async fn test_empty_catalog_has_no_quiz() {
    let app = test::init_service(build_app(in_memory_state())).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({ "username": "bob", "email": "bob@x.com", "password": "pw" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let token = body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/quiz/random")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], "NO_CONTENT");
}

#[actix_web::test]
async fn test_graphql_me_with_bearer() {
    let state = seeded_state().await;
    let user_password = state.config.seed_user_password.expose_secret().to_string();
    let app = test::init_service(build_app(state)).await;
    let token = login!(app, "user", user_password);

    let req = test::TestRequest::post()
        .uri("/graphql")
        .insert_header(bearer(&token))
        .set_json(json!({ "query": "{ me { username role } }" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["data"]["me"]["username"], "user");
    assert_eq!(body["data"]["me"]["role"], "USER");

    let req = test::TestRequest::post()
        .uri("/graphql")
        .set_json(json!({ "query": "{ me { username } }" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["errors"][0]["extensions"]["code"], "UNAUTHENTICATED");
}

#[actix_web::test]
async fn test_seeding_is_idempotent() {
    let state = in_memory_state();

    assert!(seed_database(&state).await.unwrap());
    assert!(!seed_database(&state).await.unwrap());

    let users = state.user_service.list_users().await.unwrap();
    assert_eq!(users.iter().filter(|u| u.username == "admin").count(), 1);
    assert_eq!(state.term_service.list_terms().await.unwrap().len(), 12);
}

#[actix_web::test]
async fn test_health_endpoints() {
    let app = test::init_service(build_app(in_memory_state())).await;

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ready");
    assert_eq!(body["dependencies"]["mongodb"], "not_configured");
}
