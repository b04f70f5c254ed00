use super::edge::CapEdge;
use super::graph::{CapGraph, DynamicGraph};
use petgraph::graph::EdgeIndex;

/// mock network generation functions

/// Two routes s->a->t and s->b->t with a cross edge a->b.
///
/// ```text
/// s --3--> a --2--> t
///  \       |1       ^
///   2----> b ---3---+
/// ```
///
/// Nodes are s=0, a=1, b=2, t=3; the maximum s->t flow is 5.
pub fn mock_cross_network() -> (CapGraph<u64>, Vec<EdgeIndex>) {
    let mut graph: CapGraph<u64> = DynamicGraph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let b = graph.add_node(());
    let t = graph.add_node(());
    let edges = vec![
        graph.add_edge(s, a, CapEdge::new(3)),
        graph.add_edge(s, b, CapEdge::new(2)),
        graph.add_edge(a, b, CapEdge::new(1)),
        graph.add_edge(a, t, CapEdge::new(2)),
        graph.add_edge(b, t, CapEdge::new(3)),
    ];
    (graph, edges)
}

/// A single path s->a->b->t with capacities 4, 2, 3; the middle edge is the
/// bottleneck.
pub fn mock_chain_network() -> (CapGraph<u64>, Vec<EdgeIndex>) {
    let mut graph: CapGraph<u64> = DynamicGraph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let b = graph.add_node(());
    let t = graph.add_node(());
    let edges = vec![
        graph.add_edge(s, a, CapEdge::new(4)),
        graph.add_edge(a, b, CapEdge::new(2)),
        graph.add_edge(b, t, CapEdge::new(3)),
    ];
    (graph, edges)
}

/// Two disjoint routes of capacity 2 each, no cross edge.
pub fn mock_diamond_network() -> (CapGraph<u64>, Vec<EdgeIndex>) {
    let mut graph: CapGraph<u64> = DynamicGraph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let b = graph.add_node(());
    let t = graph.add_node(());
    let edges = vec![
        graph.add_edge(s, a, CapEdge::new(2)),
        graph.add_edge(s, b, CapEdge::new(2)),
        graph.add_edge(a, t, CapEdge::new(2)),
        graph.add_edge(b, t, CapEdge::new(2)),
    ];
    (graph, edges)
}

/// Two parallel edges between the same pair of nodes, capacities 2 and 3.
pub fn mock_parallel_edge_network() -> (CapGraph<u64>, Vec<EdgeIndex>) {
    let mut graph: CapGraph<u64> = DynamicGraph::new();
    let s = graph.add_node(());
    let t = graph.add_node(());
    let edges = vec![
        graph.add_edge(s, t, CapEdge::new(2)),
        graph.add_edge(s, t, CapEdge::new(3)),
    ];
    (graph, edges)
}

/// The sink (node 2) is unreachable: the only edge leads to a dead end.
pub fn mock_disconnected_network() -> (CapGraph<u64>, Vec<EdgeIndex>) {
    let mut graph: CapGraph<u64> = DynamicGraph::new();
    let s = graph.add_node(());
    let a = graph.add_node(());
    let _t = graph.add_node(());
    let edges = vec![graph.add_edge(s, a, CapEdge::new(4))];
    (graph, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::max_flow::max_flow;
    use petgraph::graph::NodeIndex;

    #[test]
    fn mock_network_flow_values() {
        let (g, _) = mock_cross_network();
        assert_eq!(
            max_flow::<u64, _, _>(&g, NodeIndex::new(0), NodeIndex::new(3)),
            5
        );

        let (g, _) = mock_chain_network();
        assert_eq!(
            max_flow::<u64, _, _>(&g, NodeIndex::new(0), NodeIndex::new(3)),
            2
        );

        let (g, _) = mock_diamond_network();
        assert_eq!(
            max_flow::<u64, _, _>(&g, NodeIndex::new(0), NodeIndex::new(3)),
            4
        );

        let (g, _) = mock_parallel_edge_network();
        assert_eq!(
            max_flow::<u64, _, _>(&g, NodeIndex::new(0), NodeIndex::new(1)),
            5
        );

        let (g, _) = mock_disconnected_network();
        assert_eq!(
            max_flow::<u64, _, _>(&g, NodeIndex::new(0), NodeIndex::new(2)),
            0
        );
    }
}
