//! GraphQL schema definition.
//!
//! This module contains the GraphQL schema, including:
//! - [`types`] - the object and input surface over the catalog records
//! - [`query`] - query resolvers (games, authors, reviews and point lookups)
//! - [`mutation`] - mutation resolvers (addGame, updateGame, deleteGame)

mod mutation;
mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};

use crate::state::SharedState;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

/// The GraphQL schema type for the review board server.
pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Create a new GraphQL schema over the given shared state.
pub fn create_schema(state: SharedState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::state::{
        AppState,
        catalog::{Author, Catalog, Game, Review},
    };

    fn test_schema() -> AppSchema {
        let catalog = Catalog::new(
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
        );

        create_schema(AppState::new(catalog))
    }

    async fn execute(schema: &AppSchema, source: &str) -> serde_json::Value {
        let response = schema.execute(source).await;
        assert!(
            response.errors.is_empty(),
            "unexpected errors: {:?}",
            response.errors
        );
        response.data.into_json().unwrap()
    }

    #[tokio::test]
    async fn nested_joins_resolve_through_foreign_keys() {
        let schema = test_schema();

        let data = execute(
            &schema,
            r#"{ game(id: "g1") { title reviews { id rating author { name verified } } } }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({
                "game": {
                    "title": "Chess",
                    "reviews": [
                        {"id": "r1", "rating": 5, "author": {"name": "Ada", "verified": true}}
                    ]
                }
            })
        );
    }

    #[tokio::test]
    async fn author_reviews_traverse_back_to_games() {
        let schema = test_schema();

        let data = execute(
            &schema,
            r#"{ author(id: "a1") { reviews { game { title } } } }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({"author": {"reviews": [{"game": {"title": "Chess"}}]}})
        );
    }

    #[tokio::test]
    async fn missing_ids_resolve_to_null() {
        let schema = test_schema();

        let data = execute(
            &schema,
            r#"{ game(id: "nope") { id } author(id: "nope") { id } review(id: "nope") { id } }"#,
        )
        .await;

        assert_eq!(data, json!({"game": null, "author": null, "review": null}));
    }

    #[tokio::test]
    async fn add_game_appends_and_returns_created_record() {
        let schema = test_schema();

        let data = execute(
            &schema,
            r#"mutation { addGame(game: {title: "Go", platform: ["pc", "switch"]}) { id title platform } }"#,
        )
        .await;

        let created = &data["addGame"];
        assert_eq!(created["title"], "Go");
        assert_eq!(created["platform"], json!(["pc", "switch"]));
        assert!(!created["id"].as_str().unwrap().is_empty());
        assert_ne!(created["id"], "g1");

        let listed = execute(&schema, "{ games { title } }").await;
        assert_eq!(listed, json!({"games": [{"title": "Chess"}, {"title": "Go"}]}));
    }

    #[tokio::test]
    async fn update_game_merges_present_fields_only() {
        let schema = test_schema();

        let data = execute(
            &schema,
            r#"mutation { updateGame(id: "g1", edits: {title: "Chess II"}) { title platform } }"#,
        )
        .await;

        assert_eq!(
            data,
            json!({"updateGame": {"title": "Chess II", "platform": ["pc"]}})
        );
    }

    #[tokio::test]
    async fn update_unknown_game_returns_null() {
        let schema = test_schema();

        let data = execute(
            &schema,
            r#"mutation { updateGame(id: "nope", edits: {title: "Ghost"}) { title } }"#,
        )
        .await;

        assert_eq!(data, json!({"updateGame": null}));

        let listed = execute(&schema, "{ games { title } }").await;
        assert_eq!(listed, json!({"games": [{"title": "Chess"}]}));
    }

    #[tokio::test]
    async fn delete_game_orphans_reviews_gracefully() {
        let schema = test_schema();

        let data = execute(&schema, r#"mutation { deleteGame(id: "g1") { id } }"#).await;
        assert_eq!(data, json!({"deleteGame": []}));

        let orphan = execute(
            &schema,
            r#"{ review(id: "r1") { game { id } author { name } } }"#,
        )
        .await;
        assert_eq!(
            orphan,
            json!({"review": {"game": null, "author": {"name": "Ada"}}})
        );
    }

    #[tokio::test]
    async fn blank_title_is_rejected_with_an_input_error() {
        let schema = test_schema();

        let response = schema
            .execute(r#"mutation { addGame(game: {title: "   ", platform: []}) { id } }"#)
            .await;

        assert_eq!(response.errors.len(), 1);
        assert!(response.errors[0].message.contains("invalid input"));

        let listed = execute(&schema, "{ games { id } }").await;
        assert_eq!(listed["games"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn sdl_covers_the_full_operation_set() {
        let schema = test_schema();
        let sdl = schema.sdl();

        for name in ["games", "authors", "reviews", "addGame", "updateGame", "deleteGame"] {
            assert!(sdl.contains(name), "SDL is missing `{name}`");
        }
    }
}
