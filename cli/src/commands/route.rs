use std::io::{BufRead, Write};

use route_atlas_core::RouteSummary;

use crate::cli::{OutputFormat, RouteArgs};
use crate::commands::resolve_country;
use crate::error::Result;
use crate::state::LoadedAtlas;
use crate::util::bracket_list;

pub const INSERT_SOURCE: &str = "Insert the name of the source country:";
pub const INSERT_DESTINATION: &str = "Insert the name of the destination country:";

/// Find the fastest route between two countries and report its fuel use.
pub fn run<R: BufRead, W: Write>(
    loaded: &LoadedAtlas,
    args: &RouteArgs,
    format: OutputFormat,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    let atlas = &loaded.atlas;
    let Some(source) = resolve_country(atlas, args.source.as_deref(), INSERT_SOURCE, input, output)?
    else {
        return Ok(());
    };
    let Some(destination) = resolve_country(
        atlas,
        args.destination.as_deref(),
        INSERT_DESTINATION,
        input,
        output,
    )?
    else {
        return Ok(());
    };

    let summary = atlas.route(&source, &destination)?;

    match format {
        OutputFormat::Json => {
            writeln!(output, "{}", serde_json::to_string_pretty(&summary)?)?;
        }
        OutputFormat::Human => write_human(&summary, output)?,
    }

    Ok(())
}

fn write_human<W: Write>(summary: &RouteSummary, output: &mut W) -> Result<()> {
    if summary.is_trivial() {
        writeln!(output, "No crossborder travel is required!")?;
        return Ok(());
    }
    if !summary.is_reachable() {
        writeln!(
            output,
            "No route exists from {} to {}",
            summary.source, summary.destination
        )?;
        return Ok(());
    }

    writeln!(output, "The fastest route is: {}", bracket_list(&summary.path))?;
    writeln!(
        output,
        "You will spend this amount of fuel for your journey: {} units",
        summary.total_cost
    )?;
    writeln!(output, "Fuel consumption per continent: {}", summary.breakdown)?;
    if let Some(category) = &summary.highest_category {
        let cost = summary.breakdown.get(category).unwrap_or(0);
        writeln!(
            output,
            "Continent with the highest fuel consumption: {} ({})",
            category, cost
        )?;
    }

    Ok(())
}
