//! Visit-all graph traversals (BFT, DFT, recursive-order DFT).

use std::collections::{BTreeSet, VecDeque};

use log::{debug, trace};

use crate::types::{GraphResult, Vertex};

use super::Graph;

/// Order in which a traversal visits reachable vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalOrder {
    /// FIFO frontier: vertices in non-decreasing distance from the start.
    #[default]
    BreadthFirst,
    /// LIFO frontier.
    DepthFirst,
    /// Pre-order of a recursive depth-first walk.
    DepthFirstRecursive,
}

impl TraversalOrder {
    /// Return a short name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bft",
            Self::DepthFirst => "dft",
            Self::DepthFirstRecursive => "dft-recursive",
        }
    }

    /// Parse an order from its short name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bft" | "breadth" | "breadth-first" => Some(Self::BreadthFirst),
            "dft" | "depth" | "depth-first" => Some(Self::DepthFirst),
            "dft-recursive" | "recursive" => Some(Self::DepthFirstRecursive),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Result of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Traversal<V: Vertex> {
    /// Vertices in the order they were visited. Each appears once.
    pub order: Vec<V>,
    /// Every vertex reached from the start.
    pub visited: BTreeSet<V>,
}

impl<V: Vertex> Traversal<V> {
    fn new() -> Self {
        Self {
            order: Vec::new(),
            visited: BTreeSet::new(),
        }
    }

    /// Record a first visit. Returns `false` if the vertex was already seen.
    fn mark(&mut self, vertex: &V) -> bool {
        if self.visited.contains(vertex) {
            return false;
        }
        self.visited.insert(vertex.clone());
        self.order.push(vertex.clone());
        true
    }

    /// Whether the vertex was reached.
    pub fn contains(&self, vertex: &V) -> bool {
        self.visited.contains(vertex)
    }

    /// Number of vertices reached.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing was reached (never true for a successful traversal).
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Breadth-first traversal, calling `visit` on each vertex as it is reached.
pub fn bft_visit<'a, V, F>(
    graph: &'a Graph<V>,
    start: &'a V,
    mut visit: F,
) -> GraphResult<Traversal<V>>
where
    V: Vertex,
    F: FnMut(&V),
{
    graph.get_neighbors(start)?;

    let mut traversal = Traversal::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        if !traversal.mark(vertex) {
            continue;
        }
        trace!("bft visit {:?}", vertex);
        visit(vertex);
        for neighbor in graph.neighbors_iter(vertex)? {
            if !traversal.contains(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!("bft from {:?} reached {} vertices", start, traversal.len());
    Ok(traversal)
}

/// Depth-first traversal with an explicit stack, calling `visit` on each
/// vertex as it is reached.
pub fn dft_visit<'a, V, F>(
    graph: &'a Graph<V>,
    start: &'a V,
    mut visit: F,
) -> GraphResult<Traversal<V>>
where
    V: Vertex,
    F: FnMut(&V),
{
    graph.get_neighbors(start)?;

    let mut traversal = Traversal::new();
    let mut stack: Vec<&V> = vec![start];

    while let Some(vertex) = stack.pop() {
        if !traversal.mark(vertex) {
            continue;
        }
        trace!("dft visit {:?}", vertex);
        visit(vertex);
        for neighbor in graph.neighbors_iter(vertex)? {
            if !traversal.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    debug!("dft from {:?} reached {} vertices", start, traversal.len());
    Ok(traversal)
}

/// Depth-first traversal in recursive pre-order: visit a vertex, then walk
/// each unvisited neighbor to exhaustion before trying the next one.
///
/// One frame per open vertex lives on a heap stack, so the walk depth is not
/// bounded by the thread's call stack.
pub fn dft_recursive_visit<'a, V, F>(
    graph: &'a Graph<V>,
    start: &'a V,
    mut visit: F,
) -> GraphResult<Traversal<V>>
where
    V: Vertex,
    F: FnMut(&V),
{
    let mut traversal = Traversal::new();
    let mut frames = vec![graph.neighbors_iter(start)?];
    traversal.mark(start);
    visit(start);

    while let Some(frame) = frames.last_mut() {
        match frame.next() {
            Some(neighbor) if !traversal.contains(neighbor) => {
                traversal.mark(neighbor);
                trace!("dft-recursive visit {:?} at depth {}", neighbor, frames.len());
                visit(neighbor);
                frames.push(graph.neighbors_iter(neighbor)?);
            }
            Some(_) => {}
            None => {
                frames.pop();
            }
        }
    }

    debug!(
        "dft-recursive from {:?} reached {} vertices",
        start,
        traversal.len()
    );
    Ok(traversal)
}

impl<V: Vertex> Graph<V> {
    /// Breadth-first traversal from `start`.
    pub fn bft(&self, start: &V) -> GraphResult<Traversal<V>> {
        bft_visit(self, start, |_| {})
    }

    /// Depth-first traversal from `start`.
    pub fn dft(&self, start: &V) -> GraphResult<Traversal<V>> {
        dft_visit(self, start, |_| {})
    }

    /// Recursive-order depth-first traversal from `start`.
    pub fn dft_recursive(&self, start: &V) -> GraphResult<Traversal<V>> {
        dft_recursive_visit(self, start, |_| {})
    }

    /// Traverse from `start` in the given order.
    pub fn traverse(&self, order: TraversalOrder, start: &V) -> GraphResult<Traversal<V>> {
        match order {
            TraversalOrder::BreadthFirst => self.bft(start),
            TraversalOrder::DepthFirst => self.dft(start),
            TraversalOrder::DepthFirstRecursive => self.dft_recursive(start),
        }
    }
}
