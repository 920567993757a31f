//! Core graph structure: vertices with ordered adjacency sets.

use std::collections::btree_set;
use std::collections::{BTreeMap, BTreeSet};

use crate::types::{GraphError, GraphResult, Vertex};

/// A directed graph mapping each vertex to the set of vertices it points at.
///
/// Neighbor sets are ordered, so every traversal and search over the same
/// graph visits vertices in the same order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph<V: Vertex> {
    /// Adjacency: vertex -> neighbors reachable by one outgoing edge.
    vertices: BTreeMap<V, BTreeSet<V>>,
}

impl<V: Vertex> Graph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: BTreeMap::new(),
        }
    }

    /// Build a graph from directed `(from, to)` pairs, registering every
    /// endpoint as a vertex first.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (from, to) in edges {
            graph.vertices.entry(from.clone()).or_default();
            graph.vertices.entry(to.clone()).or_default();
            if let Some(neighbors) = graph.vertices.get_mut(&from) {
                neighbors.insert(to);
            }
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|n| n.len()).sum()
    }

    /// Whether the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether `id` is a registered vertex.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Whether the directed edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .map(|n| n.contains(to))
            .unwrap_or(false)
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// All directed edges, grouped by source in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.vertices
            .iter()
            .flat_map(|(from, neighbors)| neighbors.iter().map(move |to| (from, to)))
    }

    /// Add a vertex with no outgoing edges. Returns `true` if it was new.
    ///
    /// Re-adding an existing vertex clears its outgoing edges. Edges pointing
    /// at it from other vertices are kept.
    pub fn add_vertex(&mut self, id: V) -> bool {
        self.vertices.insert(id, BTreeSet::new()).is_none()
    }

    /// Add a directed edge between two existing vertices. Returns `true` if
    /// the edge was new; inserting an existing edge is a no-op.
    pub fn add_edge(&mut self, from: V, to: V) -> GraphResult<bool> {
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::vertex_not_found(&to));
        }
        let neighbors = self
            .vertices
            .get_mut(&from)
            .ok_or_else(|| GraphError::vertex_not_found(&from))?;
        Ok(neighbors.insert(to))
    }

    /// Add edges in both directions between two existing vertices.
    pub fn add_undirected_edge(&mut self, a: V, b: V) -> GraphResult<()> {
        for id in [&a, &b] {
            if !self.vertices.contains_key(id) {
                return Err(GraphError::vertex_not_found(id));
            }
        }
        self.add_edge(a.clone(), b.clone())?;
        self.add_edge(b, a)?;
        Ok(())
    }

    /// The outgoing neighbors of a vertex.
    pub fn get_neighbors(&self, id: &V) -> GraphResult<&BTreeSet<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::vertex_not_found(id))
    }

    /// Iterator over the outgoing neighbors of a vertex, in ascending order.
    pub(crate) fn neighbors_iter(&self, id: &V) -> GraphResult<btree_set::Iter<'_, V>> {
        self.get_neighbors(id).map(|n| n.iter())
    }
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
