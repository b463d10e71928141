mod common;

use std::path::Path;

use rusty_dex::Pokedex;
use tempfile::TempDir;

use common::{sample_rows, write_dataset};

fn sample_dex(dir: &TempDir) -> Pokedex {
    let path = write_dataset(dir, &sample_rows());
    Pokedex::new(&path)
}

#[test]
fn get_by_id_returns_the_matching_record() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    let bulbasaur = dex.get_by_id(1).unwrap();
    assert_eq!(bulbasaur.name, "Bulbasaur");
    assert_eq!(bulbasaur.total_stats, 318);
}

#[test]
fn get_by_id_outside_the_range_returns_none() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    assert!(dex.get_by_id(0).is_none());
    assert!(dex.get_by_id(7).is_none());
    assert!(dex.get_by_id(9999).is_none());
}

#[test]
fn get_by_name_matches_a_case_insensitive_prefix() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    assert_eq!(dex.get_by_name("bulba").unwrap().name, "Bulbasaur");
    assert_eq!(dex.get_by_name("MEWTWO").unwrap().name, "Mewtwo");
    // Prefix only: a mid-name fragment does not match.
    assert!(dex.get_by_name("saur").is_none());
}

#[test]
fn get_by_name_ties_break_to_the_last_match_in_scan_order() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    // "char" prefixes Charmander (id 3) and Charizard (id 4).
    assert_eq!(dex.get_by_name("char").unwrap().name, "Charizard");
}

#[test]
fn get_by_name_with_no_match_returns_none() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    assert!(dex.get_by_name("missingno").is_none());
}

#[test]
fn get_by_type_matches_primary_and_secondary_types() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    // Grass is a primary type only.
    let grass = dex.get_by_type("grass");
    assert_eq!(grass.len(), 2);
    // Poison appears only as a secondary type.
    let poison = dex.get_by_type("poison");
    assert_eq!(poison.len(), 2);
    // Flying appears only as a secondary type, on Charizard and Articuno.
    let flying = dex.get_by_type("flying");
    assert_eq!(flying.len(), 2);
    assert_eq!(flying["match_1"].name, "Charizard");
    assert_eq!(flying["match_2"].name, "Articuno");
}

#[test]
fn get_by_type_keys_are_numbered_in_scan_order_with_no_gaps() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    let fire = dex.get_by_type("fire");
    let mut keys: Vec<&str> = fire.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["match_1", "match_2"]);
    assert_eq!(fire["match_1"].name, "Charmander");
    assert_eq!(fire["match_2"].name, "Charizard");
}

#[test]
fn get_by_type_with_no_match_returns_an_empty_map() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    assert!(dex.get_by_type("dragon").is_empty());
}

#[test]
fn empty_pattern_trivially_matches_every_record() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    assert_eq!(dex.get_by_type("").len(), dex.len());
    assert_eq!(dex.get_by_name("").unwrap().name, "Mewtwo");
}

#[test]
fn invalid_pattern_yields_an_empty_result_instead_of_raising() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    assert!(dex.get_by_name("(").is_none());
    assert!(dex.get_by_type("(").is_empty());
}

#[test]
fn get_legendary_returns_exactly_the_flagged_records() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    let legendary = dex.get_legendary();
    assert_eq!(legendary.len(), 2);
    assert_eq!(legendary["match_1"].name, "Articuno");
    assert_eq!(legendary["match_2"].name, "Mewtwo");
    assert!(legendary.values().all(|p| p.legendary));
}

#[test]
fn get_all_returns_the_whole_collection_in_id_order() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    let all = dex.get_all();
    assert_eq!(all.len(), 6);
    let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn records_serialize_as_plain_structured_data() {
    let dir = TempDir::new().unwrap();
    let dex = sample_dex(&dir);

    let json = serde_json::to_value(dex.get_by_id(1).unwrap()).unwrap();
    assert_eq!(json["name"], "Bulbasaur");
    assert_eq!(json["stats"]["hp"], 45);
    assert_eq!(json["total_stats"], 318);
}

#[test]
fn failed_load_leaves_an_empty_store_and_queries_report_not_found() {
    let dex = Pokedex::new(Path::new("/no/such/pokemon.csv"));

    assert!(dex.is_empty());
    assert_eq!(dex.len(), 0);
    assert!(dex.get_by_id(1).is_none());
    assert!(dex.get_by_name("bulba").is_none());
    assert!(dex.get_by_type("grass").is_empty());
    assert!(dex.get_legendary().is_empty());
    assert!(dex.get_all().is_empty());
}
