use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::state::LoadedAtlas;

#[derive(Debug, Serialize)]
struct StatusReport {
    countries_file: String,
    adjacencies_file: String,
    country_count: usize,
    edge_count: usize,
    dropped_edges: usize,
    category_count: usize,
    memory_bytes: usize,
    load_time_ms: f64,
}

impl StatusReport {
    fn from_loaded(loaded: &LoadedAtlas) -> Self {
        let atlas = &loaded.atlas;
        let stats = atlas.stats();
        let mut categories: Vec<&str> = atlas
            .registry()
            .iter()
            .map(|e| e.category.as_str())
            .collect();
        categories.sort_unstable();
        categories.dedup();

        StatusReport {
            countries_file: loaded.countries_path.display().to_string(),
            adjacencies_file: loaded.adjacencies_path.display().to_string(),
            country_count: stats.nodes,
            edge_count: stats.edges,
            dropped_edges: stats.dropped_edges,
            category_count: categories.len(),
            memory_bytes: atlas.graph().memory_usage(),
            load_time_ms: loaded.load_time_ms,
        }
    }
}

/// Show statistics about the loaded map.
pub fn run<W: Write>(loaded: &LoadedAtlas, format: OutputFormat, output: &mut W) -> Result<()> {
    let report = StatusReport::from_loaded(loaded);

    match format {
        OutputFormat::Json => {
            writeln!(output, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Human => {
            writeln!(output, "countries:     {}", report.countries_file)?;
            writeln!(output, "adjacencies:   {}", report.adjacencies_file)?;
            writeln!(output, "country count: {}", report.country_count)?;
            writeln!(output, "edge count:    {}", report.edge_count)?;
            writeln!(output, "dropped edges: {}", report.dropped_edges)?;
            writeln!(output, "continents:    {}", report.category_count)?;
            writeln!(
                output,
                "memory:        ~{:.1}KB",
                report.memory_bytes as f64 / 1024.0
            )?;
            writeln!(output, "load time:     {:.2}ms", report.load_time_ms)?;
        }
    }

    Ok(())
}
