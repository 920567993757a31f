//! Path search between two vertices (BFS, DFS, recursive-order DFS).
//!
//! Every search returns `Ok(None)` when the destination cannot be reached,
//! and `Ok(Some(path))` with both endpoints included otherwise. Only a
//! missing start vertex is an error.

use std::collections::{BTreeMap, BTreeSet, VecDeque};

use log::debug;

use crate::types::{GraphResult, Vertex};

use super::Graph;

/// Which search to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Shortest path by edge count.
    #[default]
    Breadth,
    /// Some path, found with an explicit stack.
    Depth,
    /// Some path, found in recursive backtracking order.
    DepthRecursive,
}

impl SearchStrategy {
    /// Return a short name for this strategy.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Breadth => "bfs",
            Self::Depth => "dfs",
            Self::DepthRecursive => "dfs-recursive",
        }
    }

    /// Parse a strategy from its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth" => Some(Self::Breadth),
            "dfs" | "depth" => Some(Self::Depth),
            "dfs-recursive" | "recursive" => Some(Self::DepthRecursive),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Clone, Copy)]
enum Frontier {
    Fifo,
    Lifo,
}

/// Search over `(vertex, predecessor)` pairs. The first time a vertex is
/// taken off the frontier fixes its predecessor; reaching the destination
/// walks those links back to the start.
fn predecessor_search<'a, V: Vertex>(
    graph: &'a Graph<V>,
    start: &'a V,
    destination: &V,
    frontier: Frontier,
) -> GraphResult<Option<Vec<V>>> {
    graph.get_neighbors(start)?;

    let mut predecessors: BTreeMap<&'a V, Option<&'a V>> = BTreeMap::new();
    let mut pending: VecDeque<(&'a V, Option<&'a V>)> = VecDeque::new();
    pending.push_back((start, None));

    loop {
        let next = match frontier {
            Frontier::Fifo => pending.pop_front(),
            Frontier::Lifo => pending.pop_back(),
        };
        let Some((vertex, prev)) = next else {
            return Ok(None);
        };
        if predecessors.contains_key(vertex) {
            continue;
        }
        predecessors.insert(vertex, prev);

        if vertex == destination {
            return Ok(Some(reconstruct_path(&predecessors, vertex)));
        }

        for neighbor in graph.neighbors_iter(vertex)? {
            if !predecessors.contains_key(neighbor) {
                pending.push_back((neighbor, Some(vertex)));
            }
        }
    }
}

fn reconstruct_path<V: Vertex>(predecessors: &BTreeMap<&V, Option<&V>>, end: &V) -> Vec<V> {
    let mut path = vec![end.clone()];
    let mut step = predecessors.get(end).copied().flatten();
    while let Some(vertex) = step {
        path.push(vertex.clone());
        step = predecessors.get(vertex).copied().flatten();
    }
    path.reverse();
    path
}

/// Shortest path (fewest edges) from `start` to `destination`.
pub fn bfs<'a, V: Vertex>(
    graph: &'a Graph<V>,
    start: &'a V,
    destination: &V,
) -> GraphResult<Option<Vec<V>>> {
    let path = predecessor_search(graph, start, destination, Frontier::Fifo)?;
    debug!(
        "bfs {:?} -> {:?}: {}",
        start,
        destination,
        describe(path.as_deref())
    );
    Ok(path)
}

/// Some path from `start` to `destination`, explored with a stack.
pub fn dfs<'a, V: Vertex>(
    graph: &'a Graph<V>,
    start: &'a V,
    destination: &V,
) -> GraphResult<Option<Vec<V>>> {
    let path = predecessor_search(graph, start, destination, Frontier::Lifo)?;
    debug!(
        "dfs {:?} -> {:?}: {}",
        start,
        destination,
        describe(path.as_deref())
    );
    Ok(path)
}

/// The first path from `start` to `destination` found by recursive
/// backtracking. Vertices stay visited after their branch is abandoned.
pub fn dfs_recursive<'a, V: Vertex>(
    graph: &'a Graph<V>,
    start: &'a V,
    destination: &V,
) -> GraphResult<Option<Vec<V>>> {
    let mut frames = vec![graph.neighbors_iter(start)?];
    if start == destination {
        return Ok(Some(vec![start.clone()]));
    }

    let mut visited: BTreeSet<&V> = BTreeSet::new();
    visited.insert(start);
    // path[i] is the vertex whose neighbors frames[i] iterates.
    let mut path: Vec<&V> = vec![start];

    while let Some(frame) = frames.last_mut() {
        match frame.next() {
            Some(neighbor) if !visited.contains(neighbor) => {
                visited.insert(neighbor);
                path.push(neighbor);
                if neighbor == destination {
                    let found: Vec<V> = path.into_iter().cloned().collect();
                    debug!(
                        "dfs-recursive {:?} -> {:?}: {}",
                        start,
                        destination,
                        describe(Some(found.as_slice()))
                    );
                    return Ok(Some(found));
                }
                frames.push(graph.neighbors_iter(neighbor)?);
            }
            Some(_) => {}
            None => {
                frames.pop();
                path.pop();
            }
        }
    }

    debug!("dfs-recursive {:?} -> {:?}: no path", start, destination);
    Ok(None)
}

fn describe<V>(path: Option<&[V]>) -> String {
    match path {
        Some(p) => format!("{} vertices", p.len()),
        None => "no path".to_string(),
    }
}

impl<V: Vertex> Graph<V> {
    /// Shortest path from `start` to `destination`.
    pub fn bfs(&self, start: &V, destination: &V) -> GraphResult<Option<Vec<V>>> {
        bfs(self, start, destination)
    }

    /// Some path from `start` to `destination`, depth-first.
    pub fn dfs(&self, start: &V, destination: &V) -> GraphResult<Option<Vec<V>>> {
        dfs(self, start, destination)
    }

    /// Some path from `start` to `destination`, in recursive backtracking order.
    pub fn dfs_recursive(&self, start: &V, destination: &V) -> GraphResult<Option<Vec<V>>> {
        dfs_recursive(self, start, destination)
    }

    /// Run the given search strategy.
    pub fn search(
        &self,
        strategy: SearchStrategy,
        start: &V,
        destination: &V,
    ) -> GraphResult<Option<Vec<V>>> {
        match strategy {
            SearchStrategy::Breadth => self.bfs(start, destination),
            SearchStrategy::Depth => self.dfs(start, destination),
            SearchStrategy::DepthRecursive => self.dfs_recursive(start, destination),
        }
    }
}
