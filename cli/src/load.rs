use std::fs;
use std::path::Path;
use std::time::Instant;

use route_atlas_core::{Atlas, EdgeRecord, NodeRecord};

use crate::config::AtlasConfig;
use crate::error::{CliError, Result};
use crate::state::LoadedAtlas;

/// Read both record files and build the atlas.
pub fn load_atlas(config: &AtlasConfig) -> Result<LoadedAtlas> {
    let start = Instant::now();

    let countries = read_countries(&config.countries)?;
    let adjacencies = read_adjacencies(&config.adjacencies)?;
    let atlas = Atlas::load(countries, adjacencies);

    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    let stats = atlas.stats();
    tracing::debug!(
        countries = stats.nodes,
        edges = stats.edges,
        dropped_edges = stats.dropped_edges,
        load_time_ms,
        "map loaded"
    );

    Ok(LoadedAtlas {
        atlas,
        countries_path: config.countries.clone(),
        adjacencies_path: config.adjacencies.clone(),
        load_time_ms,
    })
}

/// Parse `name,continent,fuel_cost` lines.
pub fn read_countries(path: &Path) -> Result<Vec<NodeRecord>> {
    let content = read_file(path)?;
    let mut records = Vec::new();

    for (line_no, line) in data_lines(&content) {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [id, category, cost] = fields.as_slice() else {
            return Err(invalid(
                path,
                line_no,
                format!("expected 3 fields, found {}", fields.len()),
            ));
        };
        if id.is_empty() {
            return Err(invalid(path, line_no, "empty country name".to_string()));
        }
        let cost = cost
            .parse::<u64>()
            .map_err(|_| invalid(path, line_no, format!("invalid fuel cost '{}'", cost)))?;

        records.push(NodeRecord {
            id: id.to_string(),
            category: category.to_string(),
            cost,
        });
    }

    Ok(records)
}

/// Parse `name,neighbour,neighbour,...` lines.
pub fn read_adjacencies(path: &Path) -> Result<Vec<EdgeRecord>> {
    let content = read_file(path)?;
    let mut records = Vec::new();

    for (_, line) in data_lines(&content) {
        let mut fields = line.split(',').map(str::trim).filter(|f| !f.is_empty());
        let Some(from) = fields.next() else {
            continue;
        };
        records.push(EdgeRecord {
            from: from.to_string(),
            to: fields.map(str::to_string).collect(),
        });
    }

    Ok(records)
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Non-blank lines with 1-based line numbers.
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

fn invalid(path: &Path, line: usize, reason: String) -> CliError {
    CliError::InvalidRecord {
        path: path.to_path_buf(),
        line,
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_countries() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "c.csv", "Peru,South America,4\n\n New Guinea , Australia , 2 \n");
        let records = read_countries(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].id, "New Guinea");
        assert_eq!(records[1].category, "Australia");
        assert_eq!(records[1].cost, 2);
    }

    #[test]
    fn test_read_countries_bad_cost() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "c.csv", "Peru,South America,4\nChile,South America,-1\n");
        match read_countries(&path) {
            Err(CliError::InvalidRecord { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected InvalidRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_read_countries_wrong_field_count() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "c.csv", "Peru,4\n");
        assert!(matches!(read_countries(&path), Err(CliError::InvalidRecord { line: 1, .. })));
    }

    #[test]
    fn test_read_adjacencies() {
        let dir = tempdir().unwrap();
        let path = write(dir.path(), "a.csv", "Peru,Brazil,Argentina\nIceland\n,\n");
        let records = read_adjacencies(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].to, vec!["Brazil", "Argentina"]);
        assert!(records[1].to.is_empty());
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempdir().unwrap();
        let result = read_adjacencies(&dir.path().join("nope.csv"));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }

    #[test]
    fn test_load_atlas_drops_unknown_neighbours() {
        let dir = tempdir().unwrap();
        let config = AtlasConfig {
            countries: write(dir.path(), "c.csv", "A,X,1\nB,Y,2\n"),
            adjacencies: write(dir.path(), "a.csv", "A,B,Phantom\n"),
            ..AtlasConfig::default()
        };
        let loaded = load_atlas(&config).unwrap();
        assert_eq!(loaded.atlas.stats().dropped_edges, 1);
        assert!(!loaded.atlas.graph().contains_node("Phantom"));
    }
}
