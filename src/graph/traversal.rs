//! Graph traversal algorithms (BFS).

use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace};

use crate::types::MANGO_SELLER_SUFFIX;

use super::AdjacencyList;

/// Predicate matching names whose last character is `suffix`.
///
/// An empty name never matches.
pub fn ends_with<S>(suffix: char) -> impl Fn(&S) -> bool
where
    S: AsRef<str> + ?Sized,
{
    move |name: &S| name.as_ref().ends_with(suffix)
}

/// A person is a mango seller when their name ends with `'m'`.
pub fn is_mango_seller<S>(name: &S) -> bool
where
    S: AsRef<str> + ?Sized,
{
    ends_with(MANGO_SELLER_SUFFIX)(name)
}

/// Level-order search for the first node satisfying `predicate`.
///
/// The frontier is seeded with the neighbors of `start`; `start` itself is
/// never tested. Nodes are tested at most once, in non-decreasing hop count
/// with ties broken by adjacency order. A match is returned as soon as it is
/// dequeued.
pub fn search<N, G, P>(graph: &G, start: &N, mut predicate: P) -> Option<N>
where
    N: Eq + Hash + Clone + Debug,
    G: AdjacencyList<N> + ?Sized,
    P: FnMut(&N) -> bool,
{
    let mut searched: HashSet<N> = HashSet::new();
    let mut queue: VecDeque<N> = graph.neighbors(start).iter().cloned().collect();

    while let Some(node) = queue.pop_front() {
        if searched.contains(&node) {
            continue;
        }
        trace!("search: testing {:?}", node);
        if predicate(&node) {
            debug!(
                "search from {:?}: found {:?} after {} nodes",
                start,
                node,
                searched.len() + 1
            );
            return Some(node);
        }
        queue.extend(graph.neighbors(&node).iter().cloned());
        searched.insert(node);
    }

    debug!(
        "search from {:?}: no match among {} nodes",
        start,
        searched.len()
    );
    None
}

/// Shortest path (by edge count) from `start` to `end`.
///
/// Returns `[start]` when `start == end`. Otherwise the path starts with
/// `start`, ends with `end` and follows edges of the graph. Among several
/// shortest paths, the first discovered in adjacency order wins.
pub fn shortest_path<N, G>(graph: &G, start: &N, end: &N) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone + Debug,
    G: AdjacencyList<N> + ?Sized,
{
    if start == end {
        return Some(vec![start.clone()]);
    }

    let mut visited: HashSet<N> = HashSet::new();
    visited.insert(start.clone());

    let mut queue: VecDeque<(N, Vec<N>)> = graph
        .neighbors(start)
        .iter()
        .map(|next| (next.clone(), vec![start.clone(), next.clone()]))
        .collect();

    while let Some((node, path)) = queue.pop_front() {
        if !visited.insert(node.clone()) {
            continue;
        }
        trace!("shortest_path: reached {:?} in {} hops", node, path.len() - 1);
        if &node == end {
            debug!(
                "shortest_path {:?} -> {:?}: {} hops",
                start,
                end,
                path.len() - 1
            );
            return Some(path);
        }
        for next in graph.neighbors(&node) {
            if !visited.contains(next) {
                let mut extended = path.clone();
                extended.push(next.clone());
                queue.push_back((next.clone(), extended));
            }
        }
    }

    debug!("shortest_path {:?} -> {:?}: no path", start, end);
    None
}

/// Whether `end` is reachable from `start`.
///
/// Agrees with `shortest_path(..).is_some()` without carrying paths.
pub fn path_exists<N, G>(graph: &G, start: &N, end: &N) -> bool
where
    N: Eq + Hash + Clone,
    G: AdjacencyList<N> + ?Sized,
{
    if start == end {
        return true;
    }

    let mut visited: HashSet<N> = HashSet::new();
    visited.insert(start.clone());
    let mut queue: VecDeque<&N> = graph.neighbors(start).iter().collect();

    while let Some(node) = queue.pop_front() {
        if !visited.insert(node.clone()) {
            continue;
        }
        if node == end {
            return true;
        }
        queue.extend(
            graph
                .neighbors(node)
                .iter()
                .filter(|next| !visited.contains(*next)),
        );
    }
    false
}

/// Whether `path` is non-empty and each consecutive pair is an edge of `graph`.
pub fn is_valid_path<N, G>(graph: &G, path: &[N]) -> bool
where
    N: PartialEq,
    G: AdjacencyList<N> + ?Sized,
{
    !path.is_empty()
        && path
            .windows(2)
            .all(|pair| graph.neighbors(&pair[0]).contains(&pair[1]))
}

/// Result of a level-order traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal<N: Eq + Hash> {
    /// Nodes in discovery order; the start node comes first.
    pub order: Vec<N>,
    /// Hop count at which each node was discovered.
    pub depths: HashMap<N, u32>,
}

impl<N: Eq + Hash + Clone> Traversal<N> {
    /// Hop count of `node`, if it was reached.
    pub fn depth(&self, node: &N) -> Option<u32> {
        self.depths.get(node).copied()
    }

    /// Nodes grouped by hop count, each group in discovery order.
    pub fn levels(&self) -> Vec<Vec<N>> {
        let mut levels: Vec<Vec<N>> = Vec::new();
        for node in &self.order {
            let depth = self.depths.get(node).copied().unwrap_or(0) as usize;
            if levels.len() <= depth {
                levels.resize_with(depth + 1, Vec::new);
            }
            levels[depth].push(node.clone());
        }
        levels
    }

    /// Number of nodes reached.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false: the start node is part of every traversal.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// BFS from `start`, recording discovery order and hop counts.
///
/// Nodes at `max_depth` are recorded but not expanded. At most
/// `max_results` nodes are collected, and the start node always is.
pub fn traverse<N, G>(graph: &G, start: &N, max_depth: u32, max_results: usize) -> Traversal<N>
where
    N: Eq + Hash + Clone,
    G: AdjacencyList<N> + ?Sized,
{
    let mut visited: HashSet<N> = HashSet::new();
    let mut order: Vec<N> = Vec::new();
    let mut depths: HashMap<N, u32> = HashMap::new();
    let mut queue: VecDeque<(N, u32)> = VecDeque::new();

    visited.insert(start.clone());
    order.push(start.clone());
    depths.insert(start.clone(), 0);
    queue.push_back((start.clone(), 0));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= max_depth {
            continue;
        }
        if order.len() >= max_results {
            break;
        }

        for next in graph.neighbors(&current) {
            if visited.contains(next) {
                continue;
            }
            if order.len() >= max_results {
                break;
            }
            visited.insert(next.clone());
            order.push(next.clone());
            depths.insert(next.clone(), depth + 1);
            queue.push_back((next.clone(), depth + 1));
        }
    }

    Traversal { order, depths }
}
