/// Data layer: core types, loading, and querying.
///
/// Architecture:
/// ```text
///   pokemon.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  path check → schema check → rows → Vec<Pokemon>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Pokedex  │  read-only lookups and filters by linear scan
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod query;
