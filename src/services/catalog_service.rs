use tracing::{debug, info};

use crate::{
    error::ServiceError,
    state::{
        SharedState,
        catalog::{Author, Game, GameDraft, GameEdits, Review},
    },
};

/// All games in catalog order.
pub async fn list_games(state: &SharedState) -> Vec<Game> {
    state.catalog().read().await.games().to_vec()
}

/// First game matching `id`, if any.
pub async fn find_game(state: &SharedState, id: &str) -> Option<Game> {
    state.catalog().read().await.game(id).cloned()
}

/// All authors in catalog order.
pub async fn list_authors(state: &SharedState) -> Vec<Author> {
    state.catalog().read().await.authors().to_vec()
}

/// First author matching `id`, if any.
pub async fn find_author(state: &SharedState, id: &str) -> Option<Author> {
    state.catalog().read().await.author(id).cloned()
}

/// All reviews in catalog order.
pub async fn list_reviews(state: &SharedState) -> Vec<Review> {
    state.catalog().read().await.reviews().to_vec()
}

/// First review matching `id`, if any.
pub async fn find_review(state: &SharedState, id: &str) -> Option<Review> {
    state.catalog().read().await.review(id).cloned()
}

/// Reviews referencing the given game, in catalog order.
pub async fn reviews_for_game(state: &SharedState, game_id: &str) -> Vec<Review> {
    state
        .catalog()
        .read()
        .await
        .reviews_for_game(game_id)
        .cloned()
        .collect()
}

/// Reviews written by the given author, in catalog order.
pub async fn reviews_by_author(state: &SharedState, author_id: &str) -> Vec<Review> {
    state
        .catalog()
        .read()
        .await
        .reviews_by_author(author_id)
        .cloned()
        .collect()
}

/// Validate and append a new game, returning it with its generated id.
pub async fn add_game(state: &SharedState, draft: GameDraft) -> Result<Game, ServiceError> {
    validate_title(&draft.title)?;
    validate_platforms(&draft.platform)?;

    let mut catalog = state.catalog().write().await;
    let game = catalog.add_game(draft);
    info!(id = %game.id, title = %game.title, "game added");

    Ok(game)
}

/// Merge the edits into the game matching `id`.
///
/// An unknown id is not an error: the catalog stays untouched and the result
/// is empty, matching the query contract for missing records.
pub async fn update_game(
    state: &SharedState,
    id: &str,
    edits: GameEdits,
) -> Result<Option<Game>, ServiceError> {
    if let Some(title) = &edits.title {
        validate_title(title)?;
    }
    if let Some(platform) = &edits.platform {
        validate_platforms(platform)?;
    }

    let mut catalog = state.catalog().write().await;
    let updated = catalog.update_game(id, &edits);
    match &updated {
        Some(game) => info!(id = %game.id, "game updated"),
        None => debug!(id, "update for unknown game id ignored"),
    }

    Ok(updated)
}

/// Remove every game matching `id` and return the remaining sequence.
///
/// Deleting an unknown id is a no-op. Reviews referencing the removed game
/// are kept; their game join resolves to nothing from then on.
pub async fn delete_game(state: &SharedState, id: &str) -> Vec<Game> {
    let mut catalog = state.catalog().write().await;
    let remaining = catalog.delete_game(id);
    info!(id, remaining = remaining.len(), "game deleted");

    remaining
}

fn validate_title(title: &str) -> Result<(), ServiceError> {
    if title.trim().is_empty() {
        return Err(ServiceError::InvalidInput(
            "game title must not be empty".into(),
        ));
    }
    Ok(())
}

fn validate_platforms(platform: &[String]) -> Result<(), ServiceError> {
    if platform.iter().any(|entry| entry.trim().is_empty()) {
        return Err(ServiceError::InvalidInput(
            "platform entries must not be empty".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, catalog::Catalog};

    fn seeded_state() -> SharedState {
        AppState::new(Catalog::new(
            vec![Game {
                id: "g1".into(),
                title: "Chess".into(),
                platform: vec!["pc".into()],
            }],
            vec![Author {
                id: "a1".into(),
                name: "Ada".into(),
                verified: true,
            }],
            vec![Review {
                id: "r1".into(),
                rating: 5,
                content: "timeless".into(),
                game_id: "g1".into(),
                author_id: "a1".into(),
            }],
        ))
    }

    #[tokio::test]
    async fn add_game_rejects_blank_title() {
        let state = seeded_state();

        let err = add_game(
            &state,
            GameDraft {
                title: "   ".into(),
                platform: vec!["pc".into()],
            },
        )
        .await
        .unwrap_err();

        match err {
            ServiceError::InvalidInput(message) => assert!(message.contains("title")),
        }
        assert_eq!(list_games(&state).await.len(), 1);
    }

    #[tokio::test]
    async fn add_game_rejects_blank_platform_entry() {
        let state = seeded_state();

        let result = add_game(
            &state,
            GameDraft {
                title: "Go".into(),
                platform: vec!["pc".into(), "".into()],
            },
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn update_game_rejects_blank_edited_title() {
        let state = seeded_state();

        let result = update_game(
            &state,
            "g1",
            GameEdits {
                title: Some("".into()),
                platform: None,
            },
        )
        .await;

        assert!(result.is_err());
        assert_eq!(find_game(&state, "g1").await.unwrap().title, "Chess");
    }

    #[tokio::test]
    async fn update_game_unknown_id_returns_absent() {
        let state = seeded_state();

        let updated = update_game(
            &state,
            "missing",
            GameEdits {
                title: Some("Ghost".into()),
                platform: None,
            },
        )
        .await
        .unwrap();

        assert!(updated.is_none());
        assert_eq!(list_games(&state).await.len(), 1);
    }

    #[tokio::test]
    async fn delete_then_join_degrades_to_absent() {
        let state = seeded_state();

        let remaining = delete_game(&state, "g1").await;
        assert!(remaining.is_empty());

        let orphan = find_review(&state, "r1").await.unwrap();
        assert!(find_game(&state, &orphan.game_id).await.is_none());
        assert_eq!(reviews_for_game(&state, "g1").await.len(), 1);
    }
}
