use std::path::PathBuf;

use tempfile::TempDir;

/// The full 12-column header in schema order.
pub const HEADER: &str =
    "#,Name,Type 1,Type 2,HP,Attack,Defense,Sp. Atk,Sp. Def,Speed,Generation,Legendary";

/// Write a dataset file with the standard header and the given data rows,
/// returning its path.
pub fn write_dataset(dir: &TempDir, rows: &[&str]) -> PathBuf {
    write_dataset_with_header(dir, HEADER, rows)
}

/// Write a dataset file with an arbitrary header row (for schema tests).
pub fn write_dataset_with_header(dir: &TempDir, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.path().join("pokemon.csv");
    let mut content = String::from(header);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    std::fs::write(&path, content).expect("write dataset");
    path
}

/// A small valid dataset with contiguous ids 1..=6: three Grass/Poison
/// starters, two legendaries, and one Fire type with no secondary type.
pub fn sample_rows() -> Vec<&'static str> {
    vec![
        "1,Bulbasaur,Grass,Poison,45,49,49,65,65,45,1,False",
        "2,Ivysaur,Grass,Poison,60,62,63,80,80,60,1,False",
        "3,Charmander,Fire,,39,52,43,60,50,65,1,False",
        "4,Charizard,Fire,Flying,78,84,78,109,85,100,1,False",
        "5,Articuno,Ice,Flying,90,85,100,95,125,85,1,True",
        "6,Mewtwo,Psychic,,106,110,90,154,90,130,1,True",
    ]
}
