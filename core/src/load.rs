use crate::graph::Graph;
use crate::registry::{Entity, EntityRegistry};

/// One parsed location record: `(id, category, cost)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub id: String,
    pub category: String,
    pub cost: u64,
}

/// One parsed adjacency record: `from` followed by its listed neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    pub from: String,
    pub to: Vec<String>,
}

/// Counters from a batch load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub nodes: usize,
    pub edges: usize,
    /// Edge endpoints that named no known node and were skipped.
    pub dropped_edges: usize,
}

/// Build the graph and registry from parsed record batches.
///
/// Every node record becomes a node, in record order, before any edge is
/// added. Edges naming an unknown id on either side are skipped, not
/// reported as errors: an unknown `from` drops the whole record, an unknown
/// `to` drops that single entry.
pub fn load_graph<N, E>(node_records: N, edge_records: E) -> (Graph<String>, EntityRegistry)
where
    N: IntoIterator<Item = NodeRecord>,
    E: IntoIterator<Item = EdgeRecord>,
{
    let (graph, registry, _) = load_graph_with_stats(node_records, edge_records);
    (graph, registry)
}

/// [`load_graph`], also returning what was loaded and what was dropped.
pub fn load_graph_with_stats<N, E>(
    node_records: N,
    edge_records: E,
) -> (Graph<String>, EntityRegistry, LoadStats)
where
    N: IntoIterator<Item = NodeRecord>,
    E: IntoIterator<Item = EdgeRecord>,
{
    let node_records = node_records.into_iter();
    let (hint, _) = node_records.size_hint();
    let mut graph = Graph::with_capacity(hint, hint * 4);
    let mut registry = EntityRegistry::with_capacity(hint);
    let mut stats = LoadStats::default();

    for record in node_records {
        let id = record.id;
        if registry.insert(Entity {
            id: id.clone(),
            category: record.category,
            cost: record.cost,
        }) {
            graph.add_node(id);
        }
    }

    for record in edge_records {
        if !graph.contains_node(record.from.as_str()) {
            tracing::debug!(from = %record.from, "adjacency record for unknown node skipped");
            stats.dropped_edges += record.to.len();
            continue;
        }
        for to in record.to {
            if !graph.contains_node(to.as_str()) {
                tracing::debug!(from = %record.from, to = %to, "edge to unknown node skipped");
                stats.dropped_edges += 1;
                continue;
            }
            graph.add_edge(record.from.clone(), to);
        }
    }

    stats.nodes = graph.node_count();
    stats.edges = graph.edge_count();
    tracing::debug!(
        nodes = stats.nodes,
        edges = stats.edges,
        dropped_edges = stats.dropped_edges,
        "graph loaded"
    );

    (graph, registry, stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, category: &str, cost: u64) -> NodeRecord {
        NodeRecord {
            id: id.to_string(),
            category: category.to_string(),
            cost,
        }
    }

    fn adj(from: &str, to: &[&str]) -> EdgeRecord {
        EdgeRecord {
            from: from.to_string(),
            to: to.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_edge_record_loading() {
        let (graph, registry) = load_graph(
            vec![node("A", "X", 1), node("B", "Y", 2), node("C", "X", 3)],
            vec![adj("A", &["B"]), adj("B", &["C"])],
        );
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(registry.len(), 3);
        assert_eq!(graph.neighbors("A").collect::<Vec<_>>(), vec!["B"]);
        assert_eq!(graph.neighbors("C").len(), 0);
    }

    #[test]
    fn test_phantom_target_not_created() {
        let (graph, registry, stats) = load_graph_with_stats(
            vec![node("A", "X", 1)],
            vec![adj("A", &["Phantom"])],
        );
        assert!(!graph.contains_node("Phantom"));
        assert!(registry.lookup("Phantom").is_err());
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(stats.dropped_edges, 1);
    }

    #[test]
    fn test_unknown_source_record_skipped() {
        let (graph, _, stats) = load_graph_with_stats(
            vec![node("A", "X", 1), node("B", "X", 1)],
            vec![adj("Ghost", &["A", "B"]), adj("A", &["B"])],
        );
        assert!(!graph.contains_node("Ghost"));
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(stats.dropped_edges, 2);
    }

    #[test]
    fn test_adjacency_kept_one_directional() {
        let (graph, _) = load_graph(
            vec![node("A", "X", 1), node("B", "X", 1)],
            vec![adj("A", &["B"])],
        );
        assert!(graph.neighbors("B").next().is_none());
        assert!(graph.shortest_path("B", "A").is_empty());
    }

    #[test]
    fn test_node_order_follows_records() {
        let (graph, _) = load_graph(
            vec![node("C", "X", 1), node("A", "X", 1), node("B", "X", 1)],
            vec![adj("B", &["C"])],
        );
        assert_eq!(graph.nodes().collect::<Vec<_>>(), vec!["C", "A", "B"]);
    }

    #[test]
    fn test_duplicate_node_record_first_wins() {
        let (graph, registry, stats) = load_graph_with_stats(
            vec![node("A", "X", 1), node("A", "Y", 9)],
            Vec::new(),
        );
        assert_eq!(graph.node_count(), 1);
        assert_eq!(stats.nodes, 1);
        assert_eq!(registry.lookup("A").unwrap().category, "X");
    }

    #[test]
    fn test_repeated_adjacency_deduplicated() {
        let (graph, _) = load_graph(
            vec![node("A", "X", 1), node("B", "X", 1)],
            vec![adj("A", &["B", "B"]), adj("A", &["B"])],
        );
        assert_eq!(graph.edge_count(), 1);
    }
}
