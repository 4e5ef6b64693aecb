use uuid::Uuid;

/// A video game tracked by the review board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    /// Stable identifier, assigned once when the game enters the catalog.
    pub id: String,
    /// Display title of the game.
    pub title: String,
    /// Platforms the game is released on.
    pub platform: Vec<String>,
}

/// A reviewer known to the board. Seeded at startup, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    /// Stable identifier for the author.
    pub id: String,
    /// Display name of the author.
    pub name: String,
    /// Whether the author went through account verification.
    pub verified: bool,
}

/// A review linking an author to a game. Seeded at startup, never mutated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Review {
    /// Stable identifier for the review.
    pub id: String,
    /// Score out of ten.
    pub rating: i32,
    /// Free-form review text.
    pub content: String,
    /// Id of the reviewed game. May dangle after a deletion.
    pub game_id: String,
    /// Id of the review's author. Never validated against the author sequence.
    pub author_id: String,
}

/// Fields required to create a game; the id is allocated on insert.
#[derive(Debug, Clone)]
pub struct GameDraft {
    /// Display title of the new game.
    pub title: String,
    /// Platforms the new game is released on.
    pub platform: Vec<String>,
}

/// Per-field edits for an existing game.
///
/// A populated field replaces the stored value, an absent one keeps it.
#[derive(Debug, Clone, Default)]
pub struct GameEdits {
    /// Replacement title, if any.
    pub title: Option<String>,
    /// Replacement platform list, if any.
    pub platform: Option<Vec<String>>,
}

impl Game {
    /// Build a new game record from a draft, allocating a fresh unique
    /// identifier for it.
    pub fn new(draft: GameDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            platform: draft.platform,
        }
    }

    /// Copy of this record with the edits' present fields applied.
    fn merged(&self, edits: &GameEdits) -> Self {
        Self {
            id: self.id.clone(),
            title: edits.title.clone().unwrap_or_else(|| self.title.clone()),
            platform: edits
                .platform
                .clone()
                .unwrap_or_else(|| self.platform.clone()),
        }
    }
}

/// Insertion-ordered record sequences backing the resolver layer.
///
/// Every lookup is a linear scan; no index is maintained. Mutations rebuild
/// and install a new game sequence instead of patching records in place, so
/// a clone taken before a mutation keeps observing the old records.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    games: Vec<Game>,
    authors: Vec<Author>,
    reviews: Vec<Review>,
}

impl Catalog {
    /// Build a catalog from pre-seeded record sequences, preserving their order.
    pub fn new(games: Vec<Game>, authors: Vec<Author>, reviews: Vec<Review>) -> Self {
        Self {
            games,
            authors,
            reviews,
        }
    }

    /// All games in insertion order.
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// First game whose id matches, if any.
    pub fn game(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|game| game.id == id)
    }

    /// All authors in insertion order.
    pub fn authors(&self) -> &[Author] {
        &self.authors
    }

    /// First author whose id matches, if any.
    pub fn author(&self, id: &str) -> Option<&Author> {
        self.authors.iter().find(|author| author.id == id)
    }

    /// All reviews in insertion order.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// First review whose id matches, if any.
    pub fn review(&self, id: &str) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == id)
    }

    /// Reviews referencing the given game, in insertion order.
    pub fn reviews_for_game<'a>(&'a self, game_id: &'a str) -> impl Iterator<Item = &'a Review> {
        self.reviews
            .iter()
            .filter(move |review| review.game_id == game_id)
    }

    /// Reviews written by the given author, in insertion order.
    pub fn reviews_by_author<'a>(&'a self, author_id: &'a str) -> impl Iterator<Item = &'a Review> {
        self.reviews
            .iter()
            .filter(move |review| review.author_id == author_id)
    }

    /// Append a new game built from the draft and return it, generated id
    /// included. Existing ids are not consulted; uniqueness rests on the
    /// generator.
    pub fn add_game(&mut self, draft: GameDraft) -> Game {
        let game = Game::new(draft);
        self.games.push(game.clone());
        game
    }

    /// Merge the edits into every game matching `id` and install the rebuilt
    /// sequence, then return the first post-merge match. An unknown id leaves
    /// the sequence as it was and returns `None`.
    pub fn update_game(&mut self, id: &str, edits: &GameEdits) -> Option<Game> {
        self.games = self
            .games
            .iter()
            .map(|game| {
                if game.id == id {
                    game.merged(edits)
                } else {
                    game.clone()
                }
            })
            .collect();

        self.game(id).cloned()
    }

    /// Remove every game matching `id` and return a snapshot of the remaining
    /// sequence. Reviews referencing the removed game are left in place.
    pub fn delete_game(&mut self, id: &str) -> Vec<Game> {
        self.games = self
            .games
            .iter()
            .filter(|game| game.id != id)
            .cloned()
            .collect();

        self.games.clone()
    }
}
