use async_graphql::http::{GraphQLPlaygroundConfig, playground_source};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Extension, Router,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::{schema::AppSchema, state::SharedState};

/// Execute a GraphQL request against the shared schema.
async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

/// Serve the interactive playground used to explore the schema by hand.
async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

/// Routes exposing the GraphQL endpoint and its playground.
pub fn router(schema: AppSchema) -> Router<SharedState> {
    Router::new()
        .route("/graphql", get(graphql_playground).post(graphql_handler))
        .layer(Extension(schema))
}
