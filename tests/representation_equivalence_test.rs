use linkpred::algo::{EdgeList, GraphError, GraphStore, Representation, VertexId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random symmetric graph over sparse, non-contiguous identifiers
fn random_graph(seed: u64, vertices: u64, records: usize) -> EdgeList {
    let mut rng = StdRng::seed_from_u64(seed);
    let ids: Vec<VertexId> = (0..vertices).map(|i| i * 1_000 + 17).collect();

    let mut raw = Vec::with_capacity(records);
    while raw.len() < records {
        let u = ids[rng.gen_range(0..ids.len())];
        let v = ids[rng.gen_range(0..ids.len())];
        if u != v {
            raw.push((u, v));
        }
    }
    EdgeList::from_records(raw).unwrap().symmetrized()
}

fn build_all(edges: &EdgeList) -> Vec<Box<dyn GraphStore>> {
    Representation::ALL.iter().map(|r| r.build(edges)).collect()
}

#[test]
fn test_cross_representation_equivalence() {
    for seed in 0..5 {
        let edges = random_graph(seed, 40, 120);
        let stores = build_all(&edges);
        let reference = &stores[0];
        let vertices = reference.vertex_set();

        for store in &stores[1..] {
            let name = store.representation();
            assert_eq!(store.num_vertices(), reference.num_vertices(), "{}", name);
            assert_eq!(store.num_edges(), reference.num_edges(), "{}", name);
            assert_eq!(store.vertex_set(), vertices, "{}", name);

            for &u in &vertices {
                assert_eq!(store.neighbors(u).unwrap(), reference.neighbors(u).unwrap(), "{} N({})", name, u);
                for &v in &vertices {
                    assert_eq!(
                        store.contains_edge(u, v).unwrap(),
                        reference.contains_edge(u, v).unwrap(),
                        "{} edge ({}, {})",
                        name,
                        u,
                        v
                    );
                }
            }
        }
    }
}

#[test]
fn test_edge_symmetry_and_degree() {
    let edges = random_graph(42, 30, 90);
    for store in build_all(&edges) {
        let vertices = store.vertex_set();
        for &u in &vertices {
            let neighbors = store.neighbors(u).unwrap();
            assert_eq!(store.degree(u).unwrap(), neighbors.len());
            assert!(!neighbors.contains(&u));

            for &v in &vertices {
                assert_eq!(store.contains_edge(u, v).unwrap(), store.contains_edge(v, u).unwrap());
                assert_eq!(store.contains_edge(u, v).unwrap(), neighbors.contains(&v));
            }
        }
    }
}

#[test]
fn test_edge_count_matches_records() {
    let edges = random_graph(7, 25, 60);
    for store in build_all(&edges) {
        assert_eq!(store.num_edges(), edges.len() / 2);
    }
}

#[test]
fn test_unknown_vertex_on_every_representation() {
    let edges = random_graph(3, 10, 20);
    for store in build_all(&edges) {
        // Identifiers are 17 mod 1000, so 5 is never present
        assert_eq!(store.neighbors(5), Err(GraphError::UnknownVertex(5)));
        assert!(!store.contains_vertex(5));
        assert!(store.num_vertices() > 0);
    }
}

/// Without mirror records the adjacency-set layout answers differently:
/// it stores forward records only and does not index target-only vertices.
#[test]
fn test_asymmetric_input_diverges_for_adjacency_set() {
    let edges = EdgeList::from_records(vec![(1, 2), (2, 3)]).unwrap();
    assert!(!edges.is_symmetric());

    let matrix = Representation::DenseMatrix.build(&edges);
    let csr = Representation::CompressedRows.build(&edges);
    let set = Representation::AdjacencySet.build(&edges);

    assert_eq!(matrix.num_vertices(), 3);
    assert_eq!(csr.num_vertices(), 3);
    assert_eq!(set.num_vertices(), 2);

    assert_eq!(matrix.neighbors(2).unwrap(), csr.neighbors(2).unwrap());
    assert!(matrix.contains_edge(1, 2).unwrap());
    assert!(!set.contains_edge(1, 2).unwrap());
}
