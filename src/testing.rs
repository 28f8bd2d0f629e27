/// Every graph representation should satisfy the same contract.
/// Generates one test per listed trait for the given graph type, constructed with the given representation.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, $repr:expr, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use super::*;
            use crate::{prelude::*, testing::{test_graph_ops, ModelGraph, FLAGS}};
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            const REPRESENTATION: Representation = $repr;

            fn new_graph(directed: bool, weighted: bool) -> $graph {
                <$graph>::new(GraphConfig::with_flags(directed, weighted).representation(REPRESENTATION))
            }

            /// Creates a graph with `n` vertices labelled `v0, v1, ...`
            fn with_vertices(directed: bool, weighted: bool, n: NumNodes) -> $graph {
                let mut graph = new_graph(directed, weighted);
                graph.insert_vertices((0..n).map(|u| format!("v{u}"))).unwrap();
                graph
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphNew) => {
        #[test]
        fn graph_new() {
            for (directed, weighted) in FLAGS {
                let graph = new_graph(directed, weighted);

                assert_eq!(graph.is_directed(), directed);
                assert_eq!(graph.is_weighted(), weighted);
                assert_eq!(graph.config().get_representation(), REPRESENTATION);
                assert_eq!(graph.number_of_nodes(), 0);
                assert_eq!(graph.number_of_edges(), 0);
                assert!(graph.is_empty());
                assert!(graph.vertices().is_empty());
            }
        }
    };
    ($graph:ident: GraphVertexEditing) => {
        #[test]
        fn graph_vertex_editing() {
            let mut graph = new_graph(false, true);

            for (i, label) in ["A", "B", "A", ""].into_iter().enumerate() {
                assert_eq!(graph.insert_vertex(label), Ok(i as Node));
                assert_eq!(graph.number_of_nodes(), i as NumNodes + 1);
                assert_eq!(graph.vertex_label(i as Node), Ok(label));
                assert_eq!(graph.degree_of(i as Node), Ok(0));
            }
            assert_eq!(graph.find_vertex("A"), Some(0));
            assert_eq!(graph.find_vertex("C"), None);
            assert_eq!(
                graph.vertex_label(4),
                Err(GraphError::VertexOutOfRange { vertex: 4, len: 4 })
            );

            graph.insert_edge(0, 1, 2.0).unwrap();
            graph.insert_edge(1, 2, 3.0).unwrap();
            graph.insert_edge(2, 3, 4.0).unwrap();

            let before = graph.clone();
            assert_eq!(
                graph.remove_vertex(4),
                Err(GraphError::VertexOutOfRange { vertex: 4, len: 4 })
            );
            assert_eq!(graph, before);

            assert_eq!(graph.remove_vertex(1), Ok("B".to_string()));
            assert_eq!(graph.labels(), &["A", "A", ""]);
            assert_eq!(graph.number_of_edges(), 1);
            assert_eq!(graph.edge_weight(1, 2), Ok(Some(4.0)));
            assert_eq!(graph.edge_weight(2, 1), Ok(Some(4.0)));
            assert_eq!(graph.degree_of(0), Ok(0));

            // insert then remove a vertex is a round trip
            let before = graph.clone();
            let u = graph.insert_vertex("tmp").unwrap();
            graph.insert_edge(u, 0, 5.0).unwrap();
            assert_eq!(graph.remove_vertex(u), Ok("tmp".to_string()));
            assert_eq!(graph.to_string(), before.to_string());
            assert_eq!(graph, before);
        }
    };
    ($graph:ident: AdjacencyTest) => {
        #[test]
        fn adjacency_test() {
            for (directed, weighted) in FLAGS {
                let mut graph = with_vertices(directed, weighted, 3);
                graph.insert_edge(0, 1, 2.5).unwrap();

                let expected = if weighted { 2.5 } else { DEFAULT_WEIGHT };
                assert_eq!(graph.edge_weight(0, 1), Ok(Some(expected)));
                assert_eq!(graph.has_edge(0, 1), Ok(true));
                assert_eq!(graph.has_edge(1, 0), Ok(!directed));
                assert_eq!(graph.edge_weight(0, 2), Ok(None));
                assert_eq!(graph.neighbors_of(0).unwrap().collect_vec(), vec![1]);
                assert_eq!(
                    graph.neighbors_of(1).unwrap().collect_vec(),
                    if directed { vec![] } else { vec![0] }
                );

                let out_of_range = GraphError::VertexOutOfRange { vertex: 3, len: 3 };
                assert_eq!(graph.has_edge(3, 0), Err(out_of_range.clone()));
                assert_eq!(graph.has_edge(0, 3), Err(out_of_range.clone()));
                assert_eq!(graph.edge_weight(0, 3), Err(out_of_range.clone()));
                assert!(graph.neighbors_of(3).is_err());
                assert_eq!(graph.degree_of(3), Err(out_of_range));
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn graph_edge_editing() {
            for (directed, weighted) in FLAGS {
                let mut graph = with_vertices(directed, weighted, 4);
                let empty = graph.clone();

                // unweighted graphs ignore the supplied weight entirely
                graph.insert_edge(0, 1, 7.5).unwrap();
                graph.insert_unit_edge(2, 3).unwrap();
                assert_eq!(graph.edge_weight(0, 1), Ok(Some(if weighted { 7.5 } else { 1.0 })));
                assert_eq!(graph.edge_weight(2, 3), Ok(Some(1.0)));
                assert_eq!(graph.edge_weight(1, 0).unwrap().is_some(), !directed);
                assert_eq!(graph.number_of_edges(), 2);

                // re-inserting only updates the weight
                graph.insert_edge(0, 1, 3.0).unwrap();
                assert_eq!(graph.edge_weight(0, 1), Ok(Some(if weighted { 3.0 } else { 1.0 })));
                assert_eq!(graph.number_of_edges(), 2);
                assert_eq!(graph.degree_of(0), Ok(1));

                // weights indistinguishable from *no edge* are rejected by weighted graphs
                let before = graph.clone();
                assert_eq!(graph.insert_edge(1, 2, 0.0).is_err(), weighted);
                assert_eq!(graph.insert_edge(1, 2, f64::NAN).is_err(), weighted);
                if weighted {
                    assert_eq!(graph.insert_edge(1, 2, 0.0), Err(GraphError::InvalidWeight(0.0)));
                    assert_eq!(graph, before);
                } else {
                    assert_eq!(graph.edge_weight(1, 2), Ok(Some(1.0)));
                    assert!(graph.remove_edge(1, 2).unwrap());
                }

                // invalid endpoints leave the graph unchanged
                let before = graph.clone();
                let out_of_range = GraphError::VertexOutOfRange { vertex: 4, len: 4 };
                assert_eq!(graph.insert_edge(4, 0, 1.0), Err(out_of_range.clone()));
                assert_eq!(graph.insert_unit_edge(0, 4), Err(out_of_range.clone()));
                assert_eq!(graph.remove_edge(0, 4), Err(out_of_range));
                assert_eq!(graph, before);

                // removal mirrors in undirected graphs
                if !directed {
                    assert_eq!(graph.remove_edge(1, 0), Ok(true));
                    assert_eq!(graph.has_edge(0, 1), Ok(false));
                } else {
                    assert_eq!(graph.remove_edge(1, 0), Ok(false));
                    assert_eq!(graph.remove_edge(0, 1), Ok(true));
                }
                assert_eq!(graph.remove_edge(0, 1), Ok(false));
                assert_eq!(graph.remove_edge(2, 3), Ok(true));

                // insert then remove edges is a round trip
                assert!(graph.is_singleton_graph());
                assert_eq!(graph, empty);

                // self loops count once
                graph.insert_edge(2, 2, 2.0).unwrap();
                assert_eq!(graph.number_of_edges(), 1);
                assert_eq!(graph.neighbors_of(2).unwrap().collect_vec(), vec![2]);
                assert!(graph.remove_edge(2, 2).unwrap());
                assert_eq!(graph, empty);
            }
        }
    };
    ($graph:ident: RandomOperations) => {
        #[test]
        fn random_operations() {
            let _ = env_logger::builder().is_test(true).try_init();
            let rng = &mut Pcg64Mcg::seed_from_u64(3);
            const WEIGHTS: [Weight; 5] = [0.0, 1.0, 2.5, -3.0, 7.25];

            for (directed, weighted) in FLAGS {
                for _ in 0..5 {
                    let mut graph = new_graph(directed, weighted);
                    let mut model = ModelGraph::new(directed, weighted);
                    let mut next_label = 0;

                    for _ in 0..400 {
                        // Indices one past the end exercise the out-of-range paths
                        let n = graph.number_of_nodes();
                        let u = rng.random_range(0..=n);
                        let v = rng.random_range(0..=n);

                        match rng.random_range(0..10) {
                            0 | 1 => {
                                let label = format!("v{next_label}");
                                next_label += 1;
                                assert_eq!(graph.insert_vertex(label.clone()).ok(), Some(n));
                                model.insert_vertex(label);
                            }
                            2 => {
                                assert_eq!(graph.remove_vertex(u).ok(), model.remove_vertex(u));
                            }
                            3..=6 => {
                                let w = WEIGHTS[rng.random_range(0..WEIGHTS.len())];
                                assert_eq!(
                                    graph.insert_edge(u, v, w).is_ok(),
                                    model.insert_edge(u, v, w)
                                );
                            }
                            _ => {
                                assert_eq!(graph.remove_edge(u, v).ok(), model.remove_edge(u, v));
                            }
                        }

                        model.assert_matches(&graph);
                    }
                }
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
pub(crate) use model::*;
