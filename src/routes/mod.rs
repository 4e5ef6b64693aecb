use axum::Router;

use crate::{schema::create_schema, state::SharedState};

pub mod docs;
pub mod graphql;
pub mod health;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let schema = create_schema(state.clone());

    let api_router = health::router().merge(graphql::router(schema));
    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
