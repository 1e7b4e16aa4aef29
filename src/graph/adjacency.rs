//! Adjacency-list graph structure and the read-only seam traversals run against.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Read-only view of a directed graph as node -> ordered neighbor list.
///
/// A node with no entry has no outgoing edges. Implementations must return
/// an empty slice for it rather than failing.
pub trait AdjacencyList<N> {
    /// Outgoing neighbors of `node`, in adjacency order.
    fn neighbors(&self, node: &N) -> &[N];
}

impl<N, S> AdjacencyList<N> for HashMap<N, Vec<N>, S>
where
    N: Eq + Hash,
    S: BuildHasher,
{
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl<N: Ord> AdjacencyList<N> for BTreeMap<N, Vec<N>> {
    fn neighbors(&self, node: &N) -> &[N] {
        self.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Owned directed graph keeping both key insertion order and neighbor order.
///
/// Neighbor lists may name nodes that are not keys; those are leaves.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    /// Keys in the order they were first added.
    order: Vec<N>,
    /// Adjacency index: node -> outgoing neighbors.
    adjacency: HashMap<N, Vec<N>>,
}

impl<N: Eq + Hash + Clone> Graph<N> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Create an empty graph with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: Vec::with_capacity(capacity),
            adjacency: HashMap::with_capacity(capacity),
        }
    }

    /// Register `node` as a key with no neighbors. Returns `true` if it was new.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.adjacency.contains_key(&node) {
            return false;
        }
        self.order.push(node.clone());
        self.adjacency.insert(node, Vec::new());
        true
    }

    /// Append the edge `from -> to`.
    ///
    /// `from` becomes a key if needed; `to` does not. Duplicate edges and
    /// self-loops are kept as given.
    pub fn add_edge(&mut self, from: N, to: N) {
        self.add_node(from.clone());
        if let Some(list) = self.adjacency.get_mut(&from) {
            list.push(to);
        }
    }

    /// Replace the neighbor list of `node`, registering it if needed.
    pub fn set_neighbors(&mut self, node: N, neighbors: Vec<N>) {
        if !self.adjacency.contains_key(&node) {
            self.order.push(node.clone());
        }
        self.adjacency.insert(node, neighbors);
    }

    /// Outgoing neighbors of `node`; empty for unknown nodes.
    pub fn neighbors(&self, node: &N) -> &[N] {
        self.adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `node` is a key of the graph.
    pub fn contains_node(&self, node: &N) -> bool {
        self.adjacency.contains_key(node)
    }

    /// Whether `to` appears in the neighbor list of `from`.
    pub fn has_edge(&self, from: &N, to: &N) -> bool {
        self.neighbors(from).contains(to)
    }

    /// Number of keys. Leaves that only appear as neighbors are not counted.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of edges across all neighbor lists.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Whether the graph has no keys.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Keys in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.order.iter()
    }

    /// `(node, neighbors)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&N, &[N])> {
        self.order.iter().map(move |n| (n, self.neighbors(n)))
    }
}

impl<N: Eq + Hash + Clone> AdjacencyList<N> for Graph<N> {
    fn neighbors(&self, node: &N) -> &[N] {
        Graph::neighbors(self, node)
    }
}

impl<N: Eq + Hash + Clone> Default for Graph<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Eq + Hash + Clone> PartialEq for Graph<N> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.adjacency == other.adjacency
    }
}

impl<N: Eq + Hash + Clone> Eq for Graph<N> {}

impl<N: Eq + Hash + Clone> FromIterator<(N, Vec<N>)> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = (N, Vec<N>)>>(iter: I) -> Self {
        let mut graph = Self::new();
        for (node, neighbors) in iter {
            graph.set_neighbors(node, neighbors);
        }
        graph
    }
}

impl<N: Eq + Hash + Clone> From<HashMap<N, Vec<N>>> for Graph<N> {
    fn from(map: HashMap<N, Vec<N>>) -> Self {
        map.into_iter().collect()
    }
}

impl<N: fmt::Display + Eq + Hash + Clone> fmt::Display for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (node, neighbors) in self.iter() {
            let list: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
            writeln!(f, "{} -> [{}]", node, list.join(", "))?;
        }
        Ok(())
    }
}

impl<N: Serialize + Eq + Hash + Clone> Serialize for Graph<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.order.len()))?;
        for (node, neighbors) in self.iter() {
            map.serialize_entry(node, neighbors)?;
        }
        map.end()
    }
}

impl<'de, N> Deserialize<'de> for Graph<N>
where
    N: Deserialize<'de> + Eq + Hash + Clone,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(GraphVisitor(PhantomData))
    }
}

/// Reads map entries in document order so key order survives a round trip.
struct GraphVisitor<N>(PhantomData<N>);

impl<'de, N> Visitor<'de> for GraphVisitor<N>
where
    N: Deserialize<'de> + Eq + Hash + Clone,
{
    type Value = Graph<N>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of node to neighbor list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut graph = Graph::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((node, neighbors)) = access.next_entry::<N, Vec<N>>()? {
            graph.set_neighbors(node, neighbors);
        }
        Ok(graph)
    }
}
