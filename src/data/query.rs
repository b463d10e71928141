use std::collections::BTreeMap;
use std::path::Path;

use regex::{Regex, RegexBuilder};

use super::loader::load_dataset;
use super::model::Pokemon;

// ---------------------------------------------------------------------------
// Pokedex – read-only queries over a loaded collection
// ---------------------------------------------------------------------------

/// Read-only query store over a loaded dataset.
///
/// Loading happens exactly once, at construction.  If it fails the store
/// holds an empty collection and every query reports "not found" instead of
/// raising: hard failures belong to the load, queries only ever return empty
/// results.
pub struct Pokedex {
    collection: Vec<Pokemon>,
}

impl Pokedex {
    /// Build a store by loading the dataset at `path`.
    pub fn new(path: &Path) -> Self {
        let collection = match load_dataset(path) {
            Ok(collection) => collection,
            Err(err) => {
                log::error!("Failed to load dataset: {err}");
                Vec::new()
            }
        };
        Pokedex { collection }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.collection.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.collection.is_empty()
    }

    /// Look up a record by dex number.  When several records share an id
    /// the last one in collection order wins.
    pub fn get_by_id(&self, id: u32) -> Option<&Pokemon> {
        let pick = self.collection.iter().filter(|p| p.id == id).last();
        if pick.is_none() {
            log::error!("There is no pokemon with id {id}.");
        }
        pick
    }

    /// Look up a record whose name matches `pattern` as a case-insensitive
    /// prefix regex.  When several names match, the last one in collection
    /// order wins, matching the `get_by_id` tie-break.
    pub fn get_by_name(&self, pattern: &str) -> Option<&Pokemon> {
        let re = prefix_regex(pattern)?;
        let pick = self
            .collection
            .iter()
            .filter(|p| re.is_match(&p.name))
            .last();
        if pick.is_none() {
            log::error!("There is no pokemon with a name matching '{pattern}'.");
        }
        pick
    }

    /// Every record whose primary or secondary type matches `pattern` as a
    /// case-insensitive prefix regex, keyed `match_1`, `match_2`, … in scan
    /// order.  Empty map when nothing matches.
    pub fn get_by_type(&self, pattern: &str) -> BTreeMap<String, &Pokemon> {
        let Some(re) = prefix_regex(pattern) else {
            return BTreeMap::new();
        };

        let mut matches = BTreeMap::new();
        let mut found = 0;
        for pokemon in &self.collection {
            if re.is_match(&pokemon.primary_type) || re.is_match(&pokemon.secondary_type) {
                found += 1;
                matches.insert(format!("match_{found}"), pokemon);
            }
        }

        if matches.is_empty() {
            log::error!("There is no pokemon with a type matching '{pattern}'.");
        } else {
            log::info!("Pokemon with the type '{}': {}.", pattern, matches.len());
        }
        matches
    }

    /// Every legendary record, keyed `match_1`, `match_2`, … in scan order.
    pub fn get_legendary(&self) -> BTreeMap<String, &Pokemon> {
        let mut matches = BTreeMap::new();
        let mut found = 0;
        for pokemon in self.collection.iter().filter(|p| p.legendary) {
            found += 1;
            matches.insert(format!("match_{found}"), pokemon);
        }

        if matches.is_empty() {
            log::error!("There is no legendary pokemon in the collection.");
        } else {
            log::info!("Legendary pokemon found: {}.", matches.len());
        }
        matches
    }

    /// The whole collection in load order (ascending id).
    pub fn get_all(&self) -> &[Pokemon] {
        if self.collection.is_empty() {
            log::error!("The collection is empty.");
        } else {
            log::info!("Retrieved collection with {} pokemon.", self.collection.len());
        }
        &self.collection
    }
}

// ---------------------------------------------------------------------------
// Prefix matching
// ---------------------------------------------------------------------------

/// Compile `pattern` as a case-insensitive prefix regex: anchored at the
/// start of the target, not required to match the whole string.  An invalid
/// pattern is logged and yields `None` (queries never raise).
fn prefix_regex(pattern: &str) -> Option<Regex> {
    match RegexBuilder::new(&format!(r"\A(?:{pattern})"))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(err) => {
            log::error!("Invalid pattern '{pattern}': {err}");
            None
        }
    }
}
