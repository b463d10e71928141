//! rusty-dex: an in-memory Pokédex loaded from a fixed-schema CSV dataset.
//!
//! The dataset is read once into an ordered collection of immutable records;
//! all queries are linear scans over that collection.

pub mod data;

pub use data::loader::{load_dataset, LoadError, REQUIRED_COLUMNS};
pub use data::model::{Pokemon, Stats};
pub use data::query::Pokedex;
