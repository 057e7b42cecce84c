use serde::Serialize;

use crate::analysis::{CostBreakdown, RouteAnalyzer};
use crate::error::Result;
use crate::graph::Graph;
use crate::load::{load_graph_with_stats, EdgeRecord, LoadStats, NodeRecord};
use crate::registry::{Entity, EntityRegistry};

/// Loaded graph + registry, answering the two supported queries.
///
/// Built once; every query takes `&self`, so a loaded atlas can be shared
/// between readers without locking.
#[derive(Debug, Clone)]
pub struct Atlas {
    graph: Graph<String>,
    registry: EntityRegistry,
    stats: LoadStats,
}

/// Answer to an `info` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeInfo {
    #[serde(flatten)]
    pub entity: Entity,
    pub neighbors: Vec<String>,
}

/// Answer to a `route` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteSummary {
    pub source: String,
    pub destination: String,
    /// Empty when the destination is unreachable.
    pub path: Vec<String>,
    pub total_cost: u64,
    pub breakdown: CostBreakdown,
    pub highest_category: Option<String>,
}

impl RouteSummary {
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }

    /// Source and destination are the same node.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }
}

impl Atlas {
    pub fn load<N, E>(node_records: N, edge_records: E) -> Self
    where
        N: IntoIterator<Item = NodeRecord>,
        E: IntoIterator<Item = EdgeRecord>,
    {
        let (graph, registry, stats) = load_graph_with_stats(node_records, edge_records);
        Self {
            graph,
            registry,
            stats,
        }
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Static attributes and direct neighbors of `id`.
    pub fn info(&self, id: &str) -> Result<NodeInfo> {
        let entity = self.registry.lookup(id)?;
        Ok(NodeInfo {
            entity: entity.clone(),
            neighbors: self.graph.neighbors(id).cloned().collect(),
        })
    }

    /// Shortest path from `source` to `destination` and its cost summary.
    ///
    /// Both ids must be registered; reachability is not an error.
    pub fn route(&self, source: &str, destination: &str) -> Result<RouteSummary> {
        self.registry.lookup(source)?;
        self.registry.lookup(destination)?;

        let path = self.graph.shortest_path(source, destination);
        let analyzer = RouteAnalyzer::new(&self.registry);
        let total_cost = analyzer.total_cost(&path);
        let breakdown = analyzer.cost_by_category(&path);
        let highest_category = analyzer
            .highest_cost_category(&breakdown)
            .map(str::to_string);

        tracing::debug!(
            source,
            destination,
            hops = path.len().saturating_sub(1),
            total_cost,
            "route computed"
        );

        Ok(RouteSummary {
            source: source.to_string(),
            destination: destination.to_string(),
            path,
            total_cost,
            breakdown,
            highest_category,
        })
    }
}
