use serde::Serialize;

// ---------------------------------------------------------------------------
// Stats – the six base stats of one record
// ---------------------------------------------------------------------------

/// The six base stats as they appear in the source columns.
/// Values are non-negative by domain convention; this is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub special_attack: i32,
    pub special_defense: i32,
    pub speed: i32,
}

impl Stats {
    /// Sum of all six stats.
    pub fn total(&self) -> i32 {
        self.hp
            + self.attack
            + self.defense
            + self.special_attack
            + self.special_defense
            + self.speed
    }
}

// ---------------------------------------------------------------------------
// Pokemon – one row of the dataset
// ---------------------------------------------------------------------------

/// A single Pokémon (one row of the source CSV).
///
/// Records are built once by the loader and never mutated, so `total_stats`
/// stays equal to `stats.total()` for the record's whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pokemon {
    /// Dex number (the `#` column); contiguous from 1 in a valid dataset.
    pub id: u32,
    pub name: String,
    /// Primary type, e.g. "Grass".
    pub primary_type: String,
    /// Secondary type; `""` when the source cell is empty.
    pub secondary_type: String,
    pub generation: i32,
    pub legendary: bool,
    pub stats: Stats,
    /// Derived: sum of the six base stats, computed at construction.
    pub total_stats: i32,
}

impl Pokemon {
    /// Build a record from its source fields, deriving `total_stats`.
    pub fn new(
        id: u32,
        name: String,
        primary_type: String,
        secondary_type: String,
        generation: i32,
        legendary: bool,
        stats: Stats,
    ) -> Self {
        Pokemon {
            id,
            name,
            primary_type,
            secondary_type,
            generation,
            legendary,
            stats,
            total_stats: stats.total(),
        }
    }
}
