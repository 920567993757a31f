//! Earliest-ancestor queries over parent -> child pairs.

use log::debug;

use crate::graph::{Graph, SearchStrategy};
use crate::types::{path_len, GraphError, GraphResult, Vertex};

/// The earliest ancestor found for a starting vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestryReport<V: Vertex> {
    /// The ancestor furthest upstream.
    pub ancestor: V,
    /// Number of generations between the ancestor and the starting vertex.
    pub depth: usize,
    /// The path ancestor -> ... -> starting vertex.
    pub lineage: Vec<V>,
}

/// Configurable earliest-ancestor query.
///
/// Every vertex other than the starting one is searched for a path down to
/// the starting vertex; the longest path wins, and among equally long paths
/// the lowest vertex id wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct AncestryQuery {
    /// Search used from each candidate to the starting vertex. Breadth-first
    /// measures true generational distance; depth-first variants may report
    /// a longer route through the family graph.
    pub strategy: SearchStrategy,
}

impl AncestryQuery {
    /// Create a query using breadth-first search.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query with the given search strategy.
    pub fn with_strategy(strategy: SearchStrategy) -> Self {
        Self { strategy }
    }

    /// Build the family graph (edges parent -> child) and run the query.
    pub fn run<V: Vertex>(
        &self,
        pairs: &[(V, V)],
        starting_node: &V,
    ) -> GraphResult<Option<AncestryReport<V>>> {
        let graph = family_graph(pairs)?;
        self.run_on(&graph, starting_node)
    }

    /// Run the query against an existing family graph.
    ///
    /// Returns `None` when the starting vertex has no ancestors, including
    /// when it does not appear in the graph at all.
    pub fn run_on<V: Vertex>(
        &self,
        graph: &Graph<V>,
        starting_node: &V,
    ) -> GraphResult<Option<AncestryReport<V>>> {
        if !graph.contains_vertex(starting_node) {
            debug!("{:?} is not in the family graph", starting_node);
            return Ok(None);
        }

        let mut best: Option<AncestryReport<V>> = None;
        for vertex in graph.vertices() {
            if vertex == starting_node {
                continue;
            }
            let Some(lineage) = graph.search(self.strategy, vertex, starting_node)? else {
                continue;
            };
            let depth = path_len(&lineage);
            let better = match &best {
                None => true,
                Some(current) => {
                    depth > current.depth || (depth == current.depth && *vertex < current.ancestor)
                }
            };
            if better {
                best = Some(AncestryReport {
                    ancestor: vertex.clone(),
                    depth,
                    lineage,
                });
            }
        }

        match &best {
            Some(report) => debug!(
                "earliest ancestor of {:?} is {:?} at depth {}",
                starting_node, report.ancestor, report.depth
            ),
            None => debug!("{:?} has no ancestors", starting_node),
        }
        Ok(best)
    }
}

/// Build a graph with an edge parent -> child for every pair. Both members
/// of each pair become vertices.
pub fn family_graph<V: Vertex>(pairs: &[(V, V)]) -> GraphResult<Graph<V>> {
    if let Some((parent, _)) = pairs.iter().find(|(parent, child)| parent == child) {
        return Err(GraphError::SelfParent(format!("{:?}", parent)));
    }
    Ok(Graph::from_edges(pairs.iter().cloned()))
}

/// The earliest ancestor of `starting_node`, or `None` if it has none.
pub fn earliest_ancestor<V: Vertex>(pairs: &[(V, V)], starting_node: &V) -> GraphResult<Option<V>> {
    Ok(AncestryQuery::new()
        .run(pairs, starting_node)?
        .map(|report| report.ancestor))
}
