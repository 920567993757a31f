//! Fluent API for building Graph instances.

use crate::types::{GraphResult, Vertex};

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
///
/// Vertices and edges are collected first and validated together in
/// [`GraphBuilder::build`], so edges may be declared before their endpoints.
pub struct GraphBuilder<V: Vertex> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: Vertex> GraphBuilder<V> {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Declare a vertex.
    pub fn vertex(&mut self, id: V) -> &mut Self {
        self.vertices.push(id);
        self
    }

    /// Declare several vertices.
    pub fn vertices<I: IntoIterator<Item = V>>(&mut self, ids: I) -> &mut Self {
        self.vertices.extend(ids);
        self
    }

    /// Declare a directed edge.
    pub fn edge(&mut self, from: V, to: V) -> &mut Self {
        self.edges.push((from, to));
        self
    }

    /// Declare several directed edges.
    pub fn edges<I: IntoIterator<Item = (V, V)>>(&mut self, edges: I) -> &mut Self {
        self.edges.extend(edges);
        self
    }

    /// Declare an edge in each direction.
    pub fn undirected(&mut self, a: V, b: V) -> &mut Self {
        self.edges.push((a.clone(), b.clone()));
        self.edges.push((b, a));
        self
    }

    /// Build the final Graph. Fails on the first edge whose endpoint was
    /// never declared as a vertex.
    pub fn build(&self) -> GraphResult<Graph<V>> {
        let mut graph = Graph::new();
        for id in &self.vertices {
            if !graph.contains_vertex(id) {
                graph.add_vertex(id.clone());
            }
        }
        for (from, to) in &self.edges {
            graph.add_edge(from.clone(), to.clone())?;
        }
        Ok(graph)
    }
}

impl<V: Vertex> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
