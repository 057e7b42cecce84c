use std::io::{BufRead, Write};

use crate::cli::{InfoArgs, OutputFormat};
use crate::commands::resolve_country;
use crate::error::Result;
use crate::state::LoadedAtlas;
use crate::util::bracket_list;

pub const INSERT_COUNTRY: &str = "Insert the name of the country:";

/// Show a country's continent, fuel cost and neighbours.
pub fn run<R: BufRead, W: Write>(
    loaded: &LoadedAtlas,
    args: &InfoArgs,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let atlas = &loaded.atlas;
    let Some(country) = resolve_country(atlas, args.country.as_deref(), INSERT_COUNTRY, input, output)?
    else {
        return Ok(());
    };

    let info = atlas.info(&country)?;

    match format {
        OutputFormat::Json => {
            writeln!(output, "{}", serde_json::to_string_pretty(&info)?)?;
        }
        OutputFormat::Human => {
            writeln!(
                output,
                "{} => continent: {}, fuel cost: {}, neighbours: {}",
                info.entity.id,
                info.entity.category,
                info.entity.cost,
                bracket_list(&info.neighbors)
            )?;
        }
    }

    Ok(())
}
