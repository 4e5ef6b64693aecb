//! GraphQL mutation resolvers.
//!
//! The write surface covers the game sequence only; authors and reviews are
//! read-only from this layer's perspective.

use async_graphql::{Context, ID, Object, Result};

use crate::{
    schema::types::{AddGameInput, EditGameInput},
    services::catalog_service,
    state::{SharedState, catalog::Game},
};

/// Root mutation type for the GraphQL schema.
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a game from the supplied fields and return it, generated id
    /// included.
    async fn add_game(&self, ctx: &Context<'_>, game: AddGameInput) -> Result<Game> {
        let state = ctx.data::<SharedState>()?;
        let created = catalog_service::add_game(state, game.into()).await?;
        Ok(created)
    }

    /// Apply partial edits to the game matching `id` and return the merged
    /// record, or null when no game matches.
    async fn update_game(
        &self,
        ctx: &Context<'_>,
        id: ID,
        edits: EditGameInput,
    ) -> Result<Option<Game>> {
        let state = ctx.data::<SharedState>()?;
        let updated = catalog_service::update_game(state, id.as_str(), edits.into()).await?;
        Ok(updated)
    }

    /// Remove every game matching `id` and return the remaining sequence.
    /// Deleting an unknown id is a no-op.
    async fn delete_game(&self, ctx: &Context<'_>, id: ID) -> Result<Vec<Game>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::delete_game(state, id.as_str()).await)
    }
}
