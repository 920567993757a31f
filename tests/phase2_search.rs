//! Phase 2 tests: Path search (BFS, DFS, recursive-order DFS).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_walk::graph::{Graph, SearchStrategy};
use graph_walk::types::{path_len, GraphError};

// ==================== Helper ====================

fn sample_graph() -> Graph<i32> {
    let mut graph = Graph::new();
    for id in 1..=7 {
        graph.add_vertex(id);
    }
    for (from, to) in [
        (5, 3),
        (6, 3),
        (7, 1),
        (4, 7),
        (1, 2),
        (7, 6),
        (2, 4),
        (3, 5),
        (2, 3),
        (4, 6),
    ] {
        graph.add_edge(from, to).unwrap();
    }
    graph
}

fn random_graph(rng: &mut StdRng, n: u32, edges: usize) -> Graph<u32> {
    let mut graph = Graph::new();
    for id in 0..n {
        graph.add_vertex(id);
    }
    for _ in 0..edges {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        graph.add_edge(from, to).unwrap();
    }
    graph
}

/// Fewest edges over every simple path from `start` to `destination`,
/// found by exhaustive enumeration.
fn shortest_by_enumeration(graph: &Graph<u32>, start: u32, destination: u32) -> Option<usize> {
    fn walk(
        graph: &Graph<u32>,
        current: u32,
        destination: u32,
        path: &mut Vec<u32>,
        best: &mut Option<usize>,
    ) {
        if current == destination {
            let edges = path.len() - 1;
            if best.map_or(true, |b| edges < b) {
                *best = Some(edges);
            }
            return;
        }
        for &next in graph.get_neighbors(&current).unwrap() {
            if !path.contains(&next) {
                path.push(next);
                walk(graph, next, destination, path, best);
                path.pop();
            }
        }
    }

    let mut best = None;
    walk(graph, start, destination, &mut vec![start], &mut best);
    best
}

/// Every consecutive pair of the path is an edge of the graph.
fn assert_valid_path(graph: &Graph<u32>, path: &[u32], start: u32, destination: u32) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&destination));
    for pair in path.windows(2) {
        assert!(
            graph.has_edge(&pair[0], &pair[1]),
            "{} -> {} is not an edge",
            pair[0],
            pair[1]
        );
    }
}

const STRATEGIES: [SearchStrategy; 3] = [
    SearchStrategy::Breadth,
    SearchStrategy::Depth,
    SearchStrategy::DepthRecursive,
];

// ==================== Sample Graph Tests ====================

#[test]
fn test_bfs_sample_shortest_path() {
    let graph = sample_graph();
    let path = graph.bfs(&1, &6).unwrap().unwrap();
    assert_eq!(path, vec![1, 2, 4, 6]);
    assert_eq!(path_len(&path), 3);
}

#[test]
fn test_dfs_sample_path() {
    let graph = sample_graph();
    let valid = [vec![1, 2, 4, 6], vec![1, 2, 4, 7, 6]];

    let iterative = graph.dfs(&1, &6).unwrap().unwrap();
    assert!(valid.contains(&iterative), "unexpected path {:?}", iterative);

    let recursive = graph.dfs_recursive(&1, &6).unwrap().unwrap();
    assert!(valid.contains(&recursive), "unexpected path {:?}", recursive);
}

#[test]
fn test_search_start_equals_destination() {
    let graph = sample_graph();
    for strategy in STRATEGIES {
        assert_eq!(graph.search(strategy, &3, &3).unwrap(), Some(vec![3]));
    }
    assert_eq!(path_len(&[3]), 0);
}

#[test]
fn test_search_no_path_is_not_an_error() {
    let graph = sample_graph();
    // 3 and 5 only reach each other
    for strategy in STRATEGIES {
        assert_eq!(graph.search(strategy, &3, &1).unwrap(), None, "{}", strategy);
    }
}

#[test]
fn test_search_missing_start_is_an_error() {
    let graph = sample_graph();
    for strategy in STRATEGIES {
        assert!(matches!(
            graph.search(strategy, &0, &1),
            Err(GraphError::VertexNotFound(_))
        ));
    }
}

#[test]
fn test_search_missing_destination_has_no_path() {
    let graph = sample_graph();
    for strategy in STRATEGIES {
        assert_eq!(graph.search(strategy, &1, &100).unwrap(), None);
    }
}

#[test]
fn test_search_follows_edge_direction() {
    let graph = Graph::from_edges([("a", "b"), ("b", "c")]);
    assert_eq!(graph.bfs(&"a", &"c").unwrap(), Some(vec!["a", "b", "c"]));
    assert_eq!(graph.bfs(&"c", &"a").unwrap(), None);
}

#[test]
fn test_recursive_search_backtracks_out_of_dead_ends() {
    // 0 -> 1 -> 2 is a dead end; the destination hangs off 0's second branch.
    let graph = Graph::from_edges([(0u32, 1), (1, 2), (0, 3), (3, 4)]);
    let path = graph.dfs_recursive(&0, &4).unwrap().unwrap();
    assert_eq!(path, vec![0, 3, 4]);
}

#[test]
fn test_strategy_names() {
    for strategy in STRATEGIES {
        assert_eq!(SearchStrategy::from_name(strategy.name()), Some(strategy));
    }
    assert_eq!(SearchStrategy::from_name("BFS"), Some(SearchStrategy::Breadth));
    assert_eq!(SearchStrategy::from_name("astar"), None);
    assert_eq!(SearchStrategy::default(), SearchStrategy::Breadth);
}

// ==================== Property Tests ====================

#[test]
fn test_bfs_is_minimal_against_enumeration() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..40 {
        let graph = random_graph(&mut rng, 7, 14);
        for start in 0..7 {
            for destination in 0..7 {
                let expected = shortest_by_enumeration(&graph, start, destination);
                let found = graph.bfs(&start, &destination).unwrap();
                match (expected, found) {
                    (None, None) => {}
                    (Some(edges), Some(path)) => {
                        assert_valid_path(&graph, &path, start, destination);
                        assert_eq!(path_len(&path), edges);
                    }
                    (expected, found) => panic!(
                        "{} -> {}: enumeration {:?}, bfs {:?}",
                        start, destination, expected, found
                    ),
                }
            }
        }
    }
}

#[test]
fn test_depth_first_paths_are_valid() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..40 {
        let graph = random_graph(&mut rng, 9, 16);
        for start in 0..9 {
            for destination in 0..9 {
                let reachable = graph.bfs(&start, &destination).unwrap().is_some();
                for strategy in [SearchStrategy::Depth, SearchStrategy::DepthRecursive] {
                    match graph.search(strategy, &start, &destination).unwrap() {
                        Some(path) => {
                            assert!(reachable);
                            assert_valid_path(&graph, &path, start, destination);
                            let distinct: std::collections::BTreeSet<_> = path.iter().collect();
                            assert_eq!(distinct.len(), path.len(), "path revisits a vertex");
                        }
                        None => assert!(!reachable, "{} missed {} -> {}", strategy, start, destination),
                    }
                }
            }
        }
    }
}
