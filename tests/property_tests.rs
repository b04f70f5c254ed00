use dynflow::max_flow::flow::is_valid_flow;
use dynflow::max_flow::{self, CapEdge, DynamicGraph, Flow, IncrementalMaxFlow};
use petgraph::graph::{EdgeIndex, NodeIndex};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Op {
    Disable(usize),
    Enable(usize),
    Query,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        2 => (0usize..32).prop_map(Op::Disable),
        2 => (0usize..32).prop_map(Op::Enable),
        1 => Just(Op::Query),
    ]
}

/// A node count and an edge list (endpoints taken modulo the node count).
fn network_strategy() -> impl Strategy<Value = (usize, Vec<(usize, usize, u64)>)> {
    (2usize..7).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec((0..n, 0..n, 0u64..8), 1..16),
        )
    })
}

fn build_network(
    n_nodes: usize,
    edges: &[(usize, usize, u64)],
) -> (DynamicGraph<(), CapEdge<u64>>, NodeIndex, NodeIndex) {
    let mut graph = DynamicGraph::new();
    let nodes: Vec<_> = (0..n_nodes).map(|_| graph.add_node(())).collect();
    for &(a, b, cap) in edges {
        graph.add_edge(nodes[a], nodes[b], CapEdge::new(cap));
    }
    (graph, nodes[0], nodes[n_nodes - 1])
}

proptest! {
    /// Ground-truth equivalence: for any interleaving of enable/disable
    /// mutations and queries, the incremental result equals a from-scratch
    /// computation on the current enabled subgraph, the flow it leaves
    /// behind is feasible and conserved, and the cut it reports matches
    /// the flow value.
    #[test]
    fn incremental_matches_from_scratch(
        (n_nodes, edges) in network_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..40),
    ) {
        let (mut graph, source, sink) = build_network(n_nodes, &edges);
        let n_edges = graph.edge_count();
        let mut engine = IncrementalMaxFlow::new();

        for op in ops {
            match op {
                Op::Disable(i) => graph.disable_edge(EdgeIndex::new(i % n_edges)),
                Op::Enable(i) => graph.enable_edge(EdgeIndex::new(i % n_edges)),
                Op::Query => {
                    let value = engine.max_flow(&graph, source, sink);
                    prop_assert_eq!(value, max_flow::max_flow(&graph, source, sink));

                    let flow = Flow::from_fn(n_edges, |e| engine.flow(e));
                    prop_assert!(is_valid_flow(&flow, &graph, source, sink, value));

                    let (cut_value, cut) = engine.min_cut(&graph, source, sink);
                    prop_assert_eq!(cut_value, value);
                    let cut_capacity: u64 =
                        cut.iter().map(|c| graph.capacity::<u64>(c.edge)).sum();
                    prop_assert_eq!(cut_capacity, value);
                }
            }
        }

        // the final state must also agree with a fresh computation
        let value = engine.max_flow(&graph, source, sink);
        prop_assert_eq!(value, max_flow::max_flow(&graph, source, sink));
    }

    /// Monotonicity: starting from an all-disabled graph, enabling edges
    /// never decreases the flow value.
    #[test]
    fn additions_never_decrease_the_flow(
        (n_nodes, edges) in network_strategy(),
        order in prop::collection::vec(0usize..32, 1..40),
    ) {
        let (mut graph, source, sink) = build_network(n_nodes, &edges);
        let n_edges = graph.edge_count();
        for e in graph.edge_indices().collect::<Vec<_>>() {
            graph.disable_edge(e);
        }

        let mut engine = IncrementalMaxFlow::new();
        let mut last = engine.max_flow(&graph, source, sink);
        prop_assert_eq!(last, 0);
        for i in order {
            graph.enable_edge(EdgeIndex::new(i % n_edges));
            let value = engine.max_flow(&graph, source, sink);
            prop_assert!(value >= last);
            last = value;
        }
    }

    /// Cache idempotence: a repeated query with no intervening mutation
    /// returns the same value without doing any work.
    #[test]
    fn repeated_queries_are_idempotent((n_nodes, edges) in network_strategy()) {
        let (graph, source, sink) = build_network(n_nodes, &edges);
        let mut engine = IncrementalMaxFlow::new();

        let first = engine.max_flow(&graph, source, sink);
        let rounds = engine.stats().augment_rounds;
        let second = engine.max_flow(&graph, source, sink);
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.stats().augment_rounds, rounds);
        prop_assert_eq!(engine.stats().cache_hits, 1);
    }
}
