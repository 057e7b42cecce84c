use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

use crate::graph::{Graph, NodeIdx};

/// Shortest path from `start` to `dest` using BFS (unweighted, directed).
///
/// Returns the path including both endpoints, or an empty Vec when `dest`
/// is unreachable or either key is not in the graph. `start == dest` yields
/// the single-node path only when that node exists; a key absent from the
/// graph is empty even paired with itself.
///
/// Neighbors are expanded in edge insertion order and `dest` is tested when
/// a node is dequeued, so among equally short paths the one discovered first
/// wins. Each node records its predecessor when first discovered; the start
/// node's predecessor is `None`.
pub fn shortest_path<K, Q>(graph: &Graph<K>, start: &Q, dest: &Q) -> Vec<K>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let (Some(start), Some(dest)) = (graph.index_of(start), graph.index_of(dest)) else {
        return Vec::new();
    };

    let mut visited: HashMap<NodeIdx, Option<NodeIdx>> = HashMap::new();
    let mut queue: VecDeque<NodeIdx> = VecDeque::new();

    visited.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == dest {
            let path = reconstruct_path(graph, &visited, dest);
            tracing::trace!(
                visited = visited.len(),
                hops = path.len() - 1,
                "shortest_path found"
            );
            return path;
        }

        for &next in graph.outgoing_of(current) {
            if let Entry::Vacant(slot) = visited.entry(next) {
                slot.insert(Some(current));
                queue.push_back(next);
            }
        }
    }

    tracing::trace!(visited = visited.len(), "shortest_path unreachable");
    Vec::new()
}

/// Walk predecessor links from `dest` back to the start, then reverse.
fn reconstruct_path<K: Eq + Hash + Clone>(
    graph: &Graph<K>,
    visited: &HashMap<NodeIdx, Option<NodeIdx>>,
    dest: NodeIdx,
) -> Vec<K> {
    let mut path = Vec::new();
    let mut current = Some(dest);

    while let Some(idx) = current {
        path.extend(graph.key(idx).cloned());
        current = visited.get(&idx).copied().flatten();
    }

    path.reverse();
    path
}

/// BFS hop distance from `start` to every node reachable from it.
///
/// `start` maps to 0. Empty when `start` is not in the graph.
pub fn hop_distances<K, Q>(graph: &Graph<K>, start: &Q) -> HashMap<K, u32>
where
    K: Eq + Hash + Clone + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
{
    let Some(start) = graph.index_of(start) else {
        return HashMap::new();
    };

    let mut distance: HashMap<NodeIdx, u32> = HashMap::new();
    let mut queue: VecDeque<NodeIdx> = VecDeque::new();

    distance.insert(start, 0);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        let depth = distance[&current];
        for &next in graph.outgoing_of(current) {
            if let Entry::Vacant(slot) = distance.entry(next) {
                slot.insert(depth + 1);
                queue.push_back(next);
            }
        }
    }

    distance
        .into_iter()
        .filter_map(|(idx, d)| graph.key(idx).map(|k| (k.clone(), d)))
        .collect()
}

impl<K: Eq + Hash + Clone> Graph<K> {
    /// See [`shortest_path`].
    pub fn shortest_path<Q>(&self, start: &Q, dest: &Q) -> Vec<K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        shortest_path(self, start, dest)
    }
}
