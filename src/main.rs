use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use techvocab_server::{
    app_state::AppState,
    config::Config,
    graphql::create_schema,
    handlers::{configure_routes, json_config, query_config},
    middleware::RequestIdMiddleware,
    seed::seed_database,
};

fn cors(config: &Config) -> Cors {
    config
        .cors_allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .supports_credentials()
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let validated = if config.is_production() {
        config.validate_for_production()
    } else {
        config.validate()
    };
    validated.map_err(std::io::Error::other)?;

    let host = config.web_server_host.clone();
    let port = config.web_server_port;
    let seed_on_startup = config.seed_on_startup;

    let state = AppState::new(config)
        .await
        .map_err(std::io::Error::other)?;

    if seed_on_startup {
        seed_database(&state)
            .await
            .map_err(std::io::Error::other)?;
    }

    let schema = create_schema(state.clone());

    log::info!("Starting HTTP server on {}:{}", host, port);
    log::info!("GraphiQL playground: http://{}:{}/graphiql", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(schema.clone()))
            .app_data(json_config())
            .app_data(query_config())
            .wrap(cors(&state.config))
            .wrap(Logger::default())
            .wrap(RequestIdMiddleware)
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
