//! route-atlas-core: In-memory route graph.
//!
//! A fixed directed graph of named locations, a registry of their static
//! attributes (category + per-visit cost), unweighted BFS shortest paths,
//! and post-hoc cost aggregation along a path grouped by category.
//! Built once from parsed record batches, read-only afterwards.

mod analysis;
mod atlas;
mod error;
mod graph;
mod load;
mod registry;
mod traversal;

pub use analysis::{CategoryCost, CostBreakdown, RouteAnalyzer};
pub use atlas::{Atlas, NodeInfo, RouteSummary};
pub use error::{AtlasError, Result};
pub use graph::{Graph, NodeIdx, Neighbors};
pub use load::{load_graph, load_graph_with_stats, EdgeRecord, LoadStats, NodeRecord};
pub use registry::{Entity, EntityRegistry};
pub use traversal::{hop_distances, shortest_path};
