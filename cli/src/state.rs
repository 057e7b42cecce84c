use std::path::PathBuf;

use route_atlas_core::Atlas;

/// The loaded map plus where and how fast it was loaded.
pub struct LoadedAtlas {
    pub atlas: Atlas,
    pub countries_path: PathBuf,
    pub adjacencies_path: PathBuf,
    pub load_time_ms: f64,
}
