//! GraphQL query resolvers.
//!
//! Read-only projections over the catalog; none of these mutate.

use async_graphql::{Context, ID, Object, Result};

use crate::{
    services::catalog_service,
    state::{
        SharedState,
        catalog::{Author, Game, Review},
    },
};

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All games on the board, in catalog order.
    async fn games(&self, ctx: &Context<'_>) -> Result<Vec<Game>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::list_games(state).await)
    }

    /// A single game by id, or null when no game matches.
    async fn game(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Game>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::find_game(state, id.as_str()).await)
    }

    /// All authors, in catalog order.
    async fn authors(&self, ctx: &Context<'_>) -> Result<Vec<Author>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::list_authors(state).await)
    }

    /// A single author by id, or null when no author matches.
    async fn author(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Author>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::find_author(state, id.as_str()).await)
    }

    /// All reviews, in catalog order.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::list_reviews(state).await)
    }

    /// A single review by id, or null when no review matches.
    async fn review(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Review>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::find_review(state, id.as_str()).await)
    }
}
