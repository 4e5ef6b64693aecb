//! Seed data loading for the in-memory catalog.

use std::{env, fs, io::ErrorKind, path::PathBuf};

use serde::Deserialize;
use tracing::{info, warn};

use crate::state::catalog::{Author, Catalog, Game, Review};

/// Default location on disk where the server looks for the JSON seed file.
const DEFAULT_SEED_PATH: &str = "config/seed.json";
/// Environment variable that overrides [`DEFAULT_SEED_PATH`].
const SEED_PATH_ENV: &str = "PIXEL_PRESS_BACK_SEED_PATH";

/// Load the catalog seed from disk, falling back to a baked-in default data set.
///
/// A missing file is expected (fresh checkouts run on the defaults); read or
/// parse failures are logged and also fall back rather than aborting startup.
pub fn load_catalog() -> Catalog {
    let path = resolve_seed_path();
    match fs::read_to_string(&path) {
        Ok(contents) => match serde_json::from_str::<RawSeed>(&contents) {
            Ok(raw) => {
                let catalog: Catalog = raw.into();
                info!(
                    path = %path.display(),
                    games = catalog.games().len(),
                    authors = catalog.authors().len(),
                    reviews = catalog.reviews().len(),
                    "loaded catalog seed from config"
                );
                catalog
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to parse seed file; falling back to defaults"
                );
                default_catalog()
            }
        },
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!(
                path = %path.display(),
                "seed file not found; using built-in defaults"
            );
            default_catalog()
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                error = %err,
                "failed to read seed file; falling back to defaults"
            );
            default_catalog()
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of the seed file located at [`DEFAULT_SEED_PATH`].
struct RawSeed {
    #[serde(default)]
    games: Vec<RawGame>,
    #[serde(default)]
    authors: Vec<RawAuthor>,
    #[serde(default)]
    reviews: Vec<RawReview>,
}

impl From<RawSeed> for Catalog {
    fn from(value: RawSeed) -> Self {
        Catalog::new(
            value.games.into_iter().map(Into::into).collect(),
            value.authors.into_iter().map(Into::into).collect(),
            value.reviews.into_iter().map(Into::into).collect(),
        )
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of a seeded game.
struct RawGame {
    id: String,
    title: String,
    #[serde(default)]
    platform: Vec<String>,
}

impl From<RawGame> for Game {
    fn from(value: RawGame) -> Self {
        Self {
            id: value.id,
            title: value.title,
            platform: value.platform,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of a seeded author.
struct RawAuthor {
    id: String,
    name: String,
    #[serde(default)]
    verified: bool,
}

impl From<RawAuthor> for Author {
    fn from(value: RawAuthor) -> Self {
        Self {
            id: value.id,
            name: value.name,
            verified: value.verified,
        }
    }
}

#[derive(Debug, Deserialize)]
/// JSON representation of a seeded review.
struct RawReview {
    id: String,
    rating: i32,
    #[serde(default)]
    content: String,
    game_id: String,
    author_id: String,
}

impl From<RawReview> for Review {
    fn from(value: RawReview) -> Self {
        Self {
            id: value.id,
            rating: value.rating,
            content: value.content,
            game_id: value.game_id,
            author_id: value.author_id,
        }
    }
}

/// Resolve the seed path taking the environment override into account.
fn resolve_seed_path() -> PathBuf {
    env::var_os(SEED_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SEED_PATH))
}

/// Built-in seed shipped with the binary.
fn default_catalog() -> Catalog {
    let games = vec![
        Game {
            id: "1".into(),
            title: "Hollow Knight".into(),
            platform: vec!["switch".into(), "pc".into()],
        },
        Game {
            id: "2".into(),
            title: "Celeste".into(),
            platform: vec!["switch".into(), "ps5".into(), "pc".into()],
        },
        Game {
            id: "3".into(),
            title: "Hades".into(),
            platform: vec!["switch".into(), "xbox".into()],
        },
        Game {
            id: "4".into(),
            title: "Stardew Valley".into(),
            platform: vec!["pc".into()],
        },
        Game {
            id: "5".into(),
            title: "Disco Elysium".into(),
            platform: vec!["ps5".into(), "pc".into()],
        },
    ];

    let authors = vec![
        Author {
            id: "1".into(),
            name: "Ada".into(),
            verified: true,
        },
        Author {
            id: "2".into(),
            name: "Marcus".into(),
            verified: false,
        },
        Author {
            id: "3".into(),
            name: "Noor".into(),
            verified: true,
        },
    ];

    let reviews = vec![
        Review {
            id: "1".into(),
            rating: 9,
            content: "tight controls, haunting soundtrack".into(),
            game_id: "1".into(),
            author_id: "1".into(),
        },
        Review {
            id: "2".into(),
            rating: 10,
            content: "the assist mode is a masterclass".into(),
            game_id: "2".into(),
            author_id: "2".into(),
        },
        Review {
            id: "3".into(),
            rating: 8,
            content: "loops stay fresh for dozens of runs".into(),
            game_id: "3".into(),
            author_id: "3".into(),
        },
        Review {
            id: "4".into(),
            rating: 7,
            content: "slow start, generous endgame".into(),
            game_id: "4".into(),
            author_id: "1".into(),
        },
        Review {
            id: "5".into(),
            rating: 10,
            content: "prose-heavy and proud of it".into(),
            game_id: "5".into(),
            author_id: "2".into(),
        },
        Review {
            id: "6".into(),
            rating: 9,
            content: "second playthrough hits harder".into(),
            game_id: "5".into(),
            author_id: "3".into(),
        },
    ];

    Catalog::new(games, authors, reviews)
}
