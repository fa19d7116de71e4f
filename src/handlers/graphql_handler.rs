use actix_web::{get, post, web, HttpRequest, HttpResponse};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::{app_state::AppState, auth::bearer_token, graphql::Schema};

/// Attaches the bearer user, when the token resolves, to the GraphQL request.
/// Resolvers decide whether an anonymous caller is acceptable.
#[post("/graphql")]
async fn graphql(
    state: web::Data<AppState>,
    schema: web::Data<Schema>,
    req: HttpRequest,
    gql_request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = gql_request.into_inner();

    if let Ok(token) = bearer_token(&req) {
        match state.auth_service.resolve_user(&token).await {
            Ok(user) => request = request.data(user),
            Err(e) => log::debug!("Ignoring unusable bearer token on /graphql: {}", e),
        }
    }

    schema.execute(request).await.into()
}

#[get("/graphiql")]
async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
