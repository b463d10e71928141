use std::path::Path;

use anyhow::{bail, Context, Result};
use rusty_dex::Pokedex;

const USAGE: &str = "usage: rusty-dex <dataset.csv> [id <n> | name <pattern> | type <pattern> | legendary | all]";

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let path = args.first().context(USAGE)?;
    let command = args.get(1).map(String::as_str).unwrap_or("all");

    let dex = Pokedex::new(Path::new(path));

    let output = match command {
        "id" => {
            let id: u32 = args
                .get(2)
                .context(USAGE)?
                .parse()
                .context("id must be a positive integer")?;
            serde_json::to_string_pretty(&dex.get_by_id(id))?
        }
        "name" => {
            let pattern = args.get(2).context(USAGE)?;
            serde_json::to_string_pretty(&dex.get_by_name(pattern))?
        }
        "type" => {
            let pattern = args.get(2).context(USAGE)?;
            serde_json::to_string_pretty(&dex.get_by_type(pattern))?
        }
        "legendary" => serde_json::to_string_pretty(&dex.get_legendary())?,
        "all" => serde_json::to_string_pretty(&dex.get_all())?,
        other => bail!("unknown command '{other}'\n{USAGE}"),
    };

    println!("{output}");
    Ok(())
}
