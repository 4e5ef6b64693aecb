use serde::Serialize;
use utoipa::ToSchema;

/// Simple health response returned by the `/healthcheck` route.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status (always "ok" for the in-memory backend).
    pub status: String,
    /// Number of games currently in the catalog.
    pub games: usize,
    /// Number of seeded authors.
    pub authors: usize,
    /// Number of seeded reviews.
    pub reviews: usize,
}

impl HealthResponse {
    /// Create a health response indicating the system is operational.
    pub fn ok(games: usize, authors: usize, reviews: usize) -> Self {
        Self {
            status: "ok".to_string(),
            games,
            authors,
            reviews,
        }
    }
}
