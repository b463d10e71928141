use rusty_dex::REQUIRED_COLUMNS;

/// Sample rows: dex number, name, types, the six base stats, generation,
/// legendary flag.  Ids are contiguous from 1 as the loader requires; the
/// numbering is local to the sample, not the national dex.
#[rustfmt::skip]
const SAMPLE_ROWS: [(&str, &str, &str, [i32; 6], i32, bool); 12] = [
    ("Bulbasaur",  "Grass",    "Poison",   [45,  49,  49,  65,  65,  45],  1, false),
    ("Ivysaur",    "Grass",    "Poison",   [60,  62,  63,  80,  80,  60],  1, false),
    ("Venusaur",   "Grass",    "Poison",   [80,  82,  83, 100, 100,  80],  1, false),
    ("Charmander", "Fire",     "",         [39,  52,  43,  60,  50,  65],  1, false),
    ("Charmeleon", "Fire",     "",         [58,  64,  58,  80,  65,  80],  1, false),
    ("Charizard",  "Fire",     "Flying",   [78,  84,  78, 109,  85, 100],  1, false),
    ("Squirtle",   "Water",    "",         [44,  48,  65,  50,  64,  43],  1, false),
    ("Pikachu",    "Electric", "",         [35,  55,  40,  50,  50,  90],  1, false),
    ("Articuno",   "Ice",      "Flying",   [90,  85, 100,  95, 125,  85],  1, true),
    ("Zapdos",     "Electric", "Flying",   [90,  90,  85, 125,  90, 100],  1, true),
    ("Mewtwo",     "Psychic",  "",         [106, 110, 90, 154,  90, 130],  1, true),
    ("Chikorita",  "Grass",    "",         [45,  49,  65,  49,  65,  45],  2, false),
];

fn main() -> anyhow::Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "sample_pokemon.csv".to_string());

    let mut writer = csv::Writer::from_path(&output_path)?;
    writer.write_record(REQUIRED_COLUMNS)?;

    for (i, (name, primary, secondary, stats, generation, legendary)) in
        SAMPLE_ROWS.iter().enumerate()
    {
        let id = i + 1;
        let [hp, attack, defense, sp_atk, sp_def, speed] = stats;
        writer.write_record([
            id.to_string(),
            (*name).to_string(),
            (*primary).to_string(),
            (*secondary).to_string(),
            hp.to_string(),
            attack.to_string(),
            defense.to_string(),
            sp_atk.to_string(),
            sp_def.to_string(),
            speed.to_string(),
            generation.to_string(),
            if *legendary { "True" } else { "False" }.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {} pokemon to {output_path}", SAMPLE_ROWS.len());
    Ok(())
}
