use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Dense node index, assigned in first-insertion order.
pub type NodeIdx = u32;

/// In-memory directed graph: interned node keys + insertion-ordered adjacency.
///
/// Keys are interned the first time they are seen, so `nodes[i]` is the key
/// of node `i` and iteration over nodes follows insertion order. `outgoing[i]`
/// lists the targets of node `i` in the order their edges were added;
/// `edge_set` keeps adjacency a set rather than a multiset.
///
/// The graph stores keys only. Attributes attached to a key live elsewhere
/// (see [`crate::EntityRegistry`]).
#[derive(Debug, Clone)]
pub struct Graph<K> {
    nodes: Vec<K>,
    index: HashMap<K, NodeIdx>,
    outgoing: Vec<Vec<NodeIdx>>,
    edge_set: HashSet<(NodeIdx, NodeIdx)>,
}

impl<K: Eq + Hash + Clone> Graph<K> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            outgoing: Vec::new(),
            edge_set: HashSet::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
            outgoing: Vec::with_capacity(node_count),
            edge_set: HashSet::with_capacity(edge_count),
        }
    }

    /// Ensure `key` exists as a node. Idempotent; returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the graph already holds `NodeIdx::MAX + 1` nodes.
    pub fn add_node(&mut self, key: K) -> NodeIdx {
        if let Some(&idx) = self.index.get(&key) {
            return idx;
        }
        let Ok(idx) = NodeIdx::try_from(self.nodes.len()) else {
            panic!("graph node limit of {} reached", u64::from(NodeIdx::MAX) + 1);
        };
        self.index.insert(key.clone(), idx);
        self.nodes.push(key);
        self.outgoing.push(Vec::new());
        idx
    }

    /// Add a directed edge `from -> to`, creating either endpoint if needed.
    ///
    /// Returns false when the edge was already present. Self-loops are allowed.
    pub fn add_edge(&mut self, from: K, to: K) -> bool {
        let from = self.add_node(from);
        let to = self.add_node(to);
        if !self.edge_set.insert((from, to)) {
            return false;
        }
        self.outgoing[from as usize].push(to);
        true
    }

    pub fn contains_node<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(key)
    }

    /// Resolve a key to its dense index.
    pub fn index_of<Q>(&self, key: &Q) -> Option<NodeIdx>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.get(key).copied()
    }

    /// Key stored at a dense index, or `None` past the last node.
    pub fn key(&self, idx: NodeIdx) -> Option<&K> {
        self.nodes.get(idx as usize)
    }

    /// Neighbors of `key` in edge insertion order. Empty when `key` is absent.
    pub fn neighbors<Q>(&self, key: &Q) -> Neighbors<'_, K>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let targets = self
            .index_of(key)
            .map(|idx| self.outgoing_of(idx))
            .unwrap_or(&[]);
        Neighbors {
            nodes: &self.nodes,
            targets: targets.iter(),
        }
    }

    /// Outgoing target indices of a node.
    pub fn outgoing_of(&self, idx: NodeIdx) -> &[NodeIdx] {
        self.outgoing
            .get(idx as usize)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// All node keys, in insertion order.
    pub fn nodes(&self) -> std::slice::Iter<'_, K> {
        self.nodes.iter()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Approximate memory usage in bytes, not counting heap data owned by keys.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let nodes_mem = self.nodes.len() * size_of::<K>();
        let index_mem = self.index.len() * (size_of::<K>() + size_of::<NodeIdx>() + 8);
        let adjacency_mem: usize = self
            .outgoing
            .iter()
            .map(|v| size_of::<Vec<NodeIdx>>() + v.len() * size_of::<NodeIdx>())
            .sum();
        let edge_set_mem = self.edge_set.len() * (size_of::<(NodeIdx, NodeIdx)>() + 8);

        nodes_mem + index_mem + adjacency_mem + edge_set_mem
    }
}

impl<K: Eq + Hash + Clone> Default for Graph<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a node's neighbor keys, in edge insertion order.
#[derive(Debug, Clone)]
pub struct Neighbors<'a, K> {
    nodes: &'a [K],
    targets: std::slice::Iter<'a, NodeIdx>,
}

impl<'a, K> Iterator for Neighbors<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.targets.next().map(|&idx| &self.nodes[idx as usize])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.targets.size_hint()
    }
}

impl<K> ExactSizeIterator for Neighbors<'_, K> {}
