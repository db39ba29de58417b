use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graphweave::{DisjointSet, Graph, NodeId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// side x side 网格，横纵边权重为 1
fn grid(side: usize) -> (Graph<usize>, Vec<NodeId>) {
    let mut graph: Graph<usize> = Graph::new();
    let ids: Vec<NodeId> = (0..side * side).map(|i| graph.add_node(i)).collect();
    for row in 0..side {
        for col in 0..side {
            let i = row * side + col;
            if col + 1 < side {
                graph.add_undirected_edge(ids[i], ids[i + 1], 1.0).unwrap();
            }
            if row + 1 < side {
                graph.add_undirected_edge(ids[i], ids[i + side], 1.0).unwrap();
            }
        }
    }
    (graph, ids)
}

fn random_graph(nodes: usize, edges: usize) -> Graph<usize> {
    let mut rng = StdRng::seed_from_u64(17);
    let mut graph: Graph<usize> = Graph::new();
    let ids: Vec<NodeId> = (0..nodes).map(|i| graph.add_node(i)).collect();
    for _ in 0..edges {
        let a = ids[rng.gen_range(0..nodes)];
        let b = ids[rng.gen_range(0..nodes)];
        graph
            .add_undirected_edge(a, b, rng.gen_range(0.0..100.0))
            .unwrap();
    }
    graph
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("dijkstra_grid");

    for side in [10usize, 30, 60].iter() {
        let (graph, ids) = grid(*side);
        let (start, finish) = (ids[0], ids[ids.len() - 1]);
        group.bench_with_input(BenchmarkId::from_parameter(side), side, |b, _| {
            b.iter(|| black_box(graph.distance(start, finish).unwrap()));
        });
    }

    group.finish();
}

fn bench_mst(c: &mut Criterion) {
    let mut group = c.benchmark_group("kruskal_random");

    for size in [100usize, 1000, 5000].iter() {
        let graph = random_graph(*size, size * 4);
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| black_box(graph.minimum_spanning_forest().unwrap()));
        });
    }

    group.finish();
}

fn bench_disjoint_set(c: &mut Criterion) {
    c.bench_function("disjoint_set_10k_unions", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(3);
            let mut set = DisjointSet::new(0..10_000usize);
            for _ in 0..10_000 {
                let x = rng.gen_range(0..10_000usize);
                let y = rng.gen_range(0..10_000usize);
                set.union(&x, &y).unwrap();
            }
            black_box(set.set_count())
        });
    });
}

criterion_group!(benches, bench_distance, bench_mst, bench_disjoint_set);
criterion_main!(benches);
