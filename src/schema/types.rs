//! GraphQL type surface over the catalog records.
//!
//! The resolver impls live here so the records in [`crate::state::catalog`]
//! stay plain data. Relational fields pull the shared state out of the
//! request context and re-query the catalog at read time; a reference that
//! no longer resolves simply yields nothing.

use async_graphql::{Context, ID, InputObject, Object, Result};

use crate::{
    services::catalog_service,
    state::{
        SharedState,
        catalog::{Author, Game, GameDraft, GameEdits, Review},
    },
};

/// A video game on the review board.
#[Object]
impl Game {
    /// Unique identifier of the game.
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    /// Display title of the game.
    async fn title(&self) -> &str {
        &self.title
    }

    /// Platforms the game is released on.
    async fn platform(&self) -> &Vec<String> {
        &self.platform
    }

    /// Reviews written for this game, in catalog order.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::reviews_for_game(state, &self.id).await)
    }
}

/// A reviewer publishing on the board.
#[Object]
impl Author {
    /// Unique identifier of the author.
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    /// Display name of the author.
    async fn name(&self) -> &str {
        &self.name
    }

    /// Whether the author went through account verification.
    async fn verified(&self) -> bool {
        self.verified
    }

    /// Reviews written by this author, in catalog order.
    async fn reviews(&self, ctx: &Context<'_>) -> Result<Vec<Review>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::reviews_by_author(state, &self.id).await)
    }
}

/// A review tying an author to a game.
#[Object]
impl Review {
    /// Unique identifier of the review.
    async fn id(&self) -> ID {
        ID(self.id.clone())
    }

    /// Score out of ten.
    async fn rating(&self) -> i32 {
        self.rating
    }

    /// Free-form review text.
    async fn content(&self) -> &str {
        &self.content
    }

    /// The reviewed game, or null when the reference dangles.
    async fn game(&self, ctx: &Context<'_>) -> Result<Option<Game>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::find_game(state, &self.game_id).await)
    }

    /// The review's author, or null when the reference dangles.
    async fn author(&self, ctx: &Context<'_>) -> Result<Option<Author>> {
        let state = ctx.data::<SharedState>()?;
        Ok(catalog_service::find_author(state, &self.author_id).await)
    }
}

/// Fields supplied when creating a game; the id is generated server-side.
#[derive(Debug, InputObject)]
pub struct AddGameInput {
    /// Display title of the new game.
    pub title: String,
    /// Platforms the new game is released on.
    pub platform: Vec<String>,
}

impl From<AddGameInput> for GameDraft {
    fn from(value: AddGameInput) -> Self {
        Self {
            title: value.title,
            platform: value.platform,
        }
    }
}

/// Partial edits for an existing game; omitted fields keep their value.
#[derive(Debug, InputObject)]
pub struct EditGameInput {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement platform list, if any.
    pub platform: Option<Vec<String>>,
}

impl From<EditGameInput> for GameEdits {
    fn from(value: EditGameInput) -> Self {
        Self {
            title: value.title,
            platform: value.platform,
        }
    }
}
