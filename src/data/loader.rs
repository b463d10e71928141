use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;

use super::model::{Pokemon, Stats};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a load attempt failed.  Every variant is terminal for that attempt:
/// no retry, no partial collection.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The dataset path does not exist.
    #[error("dataset not found: {path}")]
    DatasetNotFound { path: PathBuf },

    /// I/O or CSV-syntax failure while reading the file.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is missing from the header row.
    #[error("column '{column}' is not part of the dataset")]
    SchemaMismatch { column: String },

    /// A cell could not be parsed as its column's type.
    #[error("row {row}: invalid '{column}' value '{value}'")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
    },

    /// No row carries the given id.  Ids must form a contiguous run
    /// starting at 1.
    #[error("no row with id {id}: ids must be contiguous from 1")]
    EmptyRow { id: u32 },

    /// The dataset parsed cleanly but produced no records.
    #[error("dataset produced an empty collection")]
    EmptyCollection,
}

// ---------------------------------------------------------------------------
// Schema
// ---------------------------------------------------------------------------

/// The 12 required column names, exactly as they appear in the header.
/// Order in the file is insignificant.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "#",
    "Name",
    "Type 1",
    "Type 2",
    "HP",
    "Attack",
    "Defense",
    "Sp. Atk",
    "Sp. Def",
    "Speed",
    "Generation",
    "Legendary",
];

/// Header positions of the required columns, resolved once per load.
struct Columns {
    id: usize,
    name: usize,
    primary_type: usize,
    secondary_type: usize,
    hp: usize,
    attack: usize,
    defense: usize,
    special_attack: usize,
    special_defense: usize,
    speed: usize,
    generation: usize,
    legendary: usize,
}

impl Columns {
    /// Locate every required column in the header, failing with
    /// [`LoadError::SchemaMismatch`] on the first one that is missing.
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let position = |column: &str| -> Result<usize, LoadError> {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| LoadError::SchemaMismatch {
                    column: column.to_string(),
                })
        };

        Ok(Columns {
            id: position("#")?,
            name: position("Name")?,
            primary_type: position("Type 1")?,
            secondary_type: position("Type 2")?,
            hp: position("HP")?,
            attack: position("Attack")?,
            defense: position("Defense")?,
            special_attack: position("Sp. Atk")?,
            special_defense: position("Sp. Def")?,
            speed: position("Speed")?,
            generation: position("Generation")?,
            legendary: position("Legendary")?,
        })
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load the dataset at `path` into an ordered collection of records.
///
/// Pipeline: path check → schema check → typed row conversion → dense-id
/// materialization → emptiness check.  The result is ordered by ascending
/// id (1, 2, … max), not by row order in the file.
///
/// Precondition: the `#` column holds a contiguous run of positive integers
/// starting at 1.  A gap in that run fails the whole load with
/// [`LoadError::EmptyRow`].  When several rows share an id, the first one
/// in file order wins.
pub fn load_dataset(path: &Path) -> Result<Vec<Pokemon>, LoadError> {
    if !path.exists() {
        return Err(LoadError::DatasetNotFound {
            path: path.to_path_buf(),
        });
    }
    log::info!("Dataset path is correct.");

    let mut reader = csv::Reader::from_path(path)?;
    let columns = Columns::resolve(reader.headers()?)?;

    // First row per id, in ascending-id order thanks to the BTreeMap.
    let mut by_id: BTreeMap<u32, Pokemon> = BTreeMap::new();
    let mut max_id = 0u32;

    for (i, result) in reader.records().enumerate() {
        let record = result?;
        let row_no = i + 1;
        let pokemon = parse_row(&record, &columns, row_no)?;
        max_id = max_id.max(pokemon.id);
        by_id.entry(pokemon.id).or_insert(pokemon);
    }

    // Materialize ids 1..=max; rows with ids outside that range (e.g. 0)
    // are dropped here.
    let mut collection = Vec::with_capacity(max_id as usize);
    for id in 1..=max_id {
        match by_id.remove(&id) {
            Some(pokemon) => collection.push(pokemon),
            None => return Err(LoadError::EmptyRow { id }),
        }
    }

    if collection.is_empty() {
        return Err(LoadError::EmptyCollection);
    }

    log::info!("Loaded {} pokemon from {}.", collection.len(), path.display());
    Ok(collection)
}

/// Convert one CSV row into a record.  `row_no` is 1-based and only used
/// for error reporting.
fn parse_row(record: &StringRecord, columns: &Columns, row_no: usize) -> Result<Pokemon, LoadError> {
    let stats = Stats {
        hp: parse_int(record, columns.hp, "HP", row_no)?,
        attack: parse_int(record, columns.attack, "Attack", row_no)?,
        defense: parse_int(record, columns.defense, "Defense", row_no)?,
        special_attack: parse_int(record, columns.special_attack, "Sp. Atk", row_no)?,
        special_defense: parse_int(record, columns.special_defense, "Sp. Def", row_no)?,
        speed: parse_int(record, columns.speed, "Speed", row_no)?,
    };

    Ok(Pokemon::new(
        parse_id(record, columns.id, row_no)?,
        cell(record, columns.name).to_string(),
        cell(record, columns.primary_type).to_string(),
        // An absent secondary type is an empty cell; keep it as "".
        cell(record, columns.secondary_type).to_string(),
        parse_int(record, columns.generation, "Generation", row_no)?,
        parse_bool(record, columns.legendary, "Legendary", row_no)?,
        stats,
    ))
}

fn cell<'a>(record: &'a StringRecord, idx: usize) -> &'a str {
    record.get(idx).unwrap_or("")
}

fn parse_id(record: &StringRecord, idx: usize, row_no: usize) -> Result<u32, LoadError> {
    let value = cell(record, idx).trim();
    value.parse::<u32>().map_err(|_| LoadError::InvalidCell {
        row: row_no,
        column: "#".to_string(),
        value: value.to_string(),
    })
}

fn parse_int(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row_no: usize,
) -> Result<i32, LoadError> {
    let value = cell(record, idx).trim();
    value.parse::<i32>().map_err(|_| LoadError::InvalidCell {
        row: row_no,
        column: column.to_string(),
        value: value.to_string(),
    })
}

/// Boolean cells arrive as `True` / `False` (pandas capitalization) but are
/// accepted case-insensitively.
fn parse_bool(
    record: &StringRecord,
    idx: usize,
    column: &str,
    row_no: usize,
) -> Result<bool, LoadError> {
    let value = cell(record, idx).trim();
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(LoadError::InvalidCell {
            row: row_no,
            column: column.to_string(),
            value: value.to_string(),
        })
    }
}
