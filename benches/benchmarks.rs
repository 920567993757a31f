//! Criterion benchmarks for graph-walk.

use std::collections::BTreeMap;

use criterion::{criterion_group, criterion_main, Criterion};
use rand::Rng;
use tempfile::NamedTempFile;

use graph_walk::engine::{earliest_ancestor, replay, Exits, ExitPolicy, MazeExplorer, World};
use graph_walk::format::{DocumentReader, DocumentWriter, GraphDocument};
use graph_walk::graph::Graph;
use graph_walk::types::Direction;

/// Build a random directed graph with `edges_per_vertex` outgoing edges each.
fn make_graph(vertex_count: u32, edges_per_vertex: usize) -> Graph<u32> {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::new();
    for id in 0..vertex_count {
        graph.add_vertex(id);
    }
    for id in 0..vertex_count {
        for _ in 0..edges_per_vertex {
            let target = rng.gen_range(0..vertex_count);
            let _ = graph.add_edge(id, target);
        }
    }
    graph
}

/// A fully connected `side` x `side` grid maze starting in the corner.
fn make_grid(side: u32) -> World {
    let mut rooms = BTreeMap::new();
    for y in 0..side {
        for x in 0..side {
            let id = y * side + x;
            let mut exits = Exits::new();
            if y + 1 < side {
                exits.insert(Direction::North, id + side);
            }
            if y > 0 {
                exits.insert(Direction::South, id - side);
            }
            if x + 1 < side {
                exits.insert(Direction::East, id + 1);
            }
            if x > 0 {
                exits.insert(Direction::West, id - 1);
            }
            rooms.insert(id, exits);
        }
    }
    World::from_rooms(0, rooms).unwrap()
}

/// Parent -> child pairs of a binary family tree; vertex 1 is the root.
fn make_family(size: i64) -> Vec<(i64, i64)> {
    (2..=size).map(|child| (child / 2, child)).collect()
}

fn bench_add_edge(c: &mut Criterion) {
    let mut graph = make_graph(10_000, 3);
    let mut rng = rand::thread_rng();

    c.bench_function("add_edge_to_10k", |b| {
        b.iter(|| {
            let from = rng.gen_range(0..10_000);
            let to = rng.gen_range(0..10_000);
            let _ = graph.add_edge(from, to);
        })
    });
}

fn bench_bft_100k(c: &mut Criterion) {
    let graph = make_graph(100_000, 3);

    c.bench_function("bft_100k", |b| {
        b.iter(|| {
            let _ = graph.bft(&0);
        })
    });
}

fn bench_dft_recursive_100k(c: &mut Criterion) {
    let graph = make_graph(100_000, 3);

    c.bench_function("dft_recursive_100k", |b| {
        b.iter(|| {
            let _ = graph.dft_recursive(&0);
        })
    });
}

fn bench_bfs_100k(c: &mut Criterion) {
    let graph = make_graph(100_000, 3);

    c.bench_function("bfs_100k", |b| {
        b.iter(|| {
            let _ = graph.bfs(&0, &99_999);
        })
    });
}

fn bench_dfs_100k(c: &mut Criterion) {
    let graph = make_graph(100_000, 3);

    c.bench_function("dfs_100k", |b| {
        b.iter(|| {
            let _ = graph.dfs(&0, &99_999);
        })
    });
}

fn bench_earliest_ancestor(c: &mut Criterion) {
    let pairs = make_family(500);

    c.bench_function("earliest_ancestor_500", |b| {
        b.iter(|| {
            let _ = earliest_ancestor(&pairs, &500);
        })
    });
}

fn bench_explore_grid(c: &mut Criterion) {
    let world = make_grid(30);

    c.bench_function("explore_grid_900", |b| {
        b.iter(|| {
            let _ = MazeExplorer::new(ExitPolicy::Random { seed: 7 }).explore(&world);
        })
    });
}

fn bench_replay_grid(c: &mut Criterion) {
    let world = make_grid(30);
    let moves = MazeExplorer::new(ExitPolicy::First)
        .explore(&world)
        .unwrap()
        .moves;

    c.bench_function("replay_grid_900", |b| {
        b.iter(|| {
            let _ = replay(&world, &moves);
        })
    });
}

fn bench_read_graph_10k(c: &mut Criterion) {
    let graph = make_graph(10_000, 3);
    let graph: Graph<i64> =
        Graph::from_edges(graph.edges().map(|(&from, &to)| (i64::from(from), i64::from(to))));
    let tmp = NamedTempFile::new().unwrap();
    DocumentWriter::new(false)
        .write_to_file(&GraphDocument::from_graph(&graph), tmp.path())
        .unwrap();

    c.bench_function("read_graph_10k", |b| {
        b.iter(|| {
            let doc: GraphDocument = DocumentReader::read_from_file(tmp.path()).unwrap();
            let _ = doc.into_graph();
        })
    });
}

criterion_group!(
    benches,
    bench_add_edge,
    bench_bft_100k,
    bench_dft_recursive_100k,
    bench_bfs_100k,
    bench_dfs_100k,
    bench_earliest_ancestor,
    bench_explore_grid,
    bench_replay_grid,
    bench_read_graph_10k,
);
criterion_main!(benches);
