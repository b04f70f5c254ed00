//!
//! diagnostics helpers
//!
use super::edge::FlowEdge;
use super::flow::Flow;
use super::graph::DynamicGraph;
use super::FlowRate;
use itertools::Itertools;
use petgraph::dot::Dot;

/// Dot rendering of the wrapped graph with node/edge weights as labels.
pub fn dot_string<N, E>(graph: &DynamicGraph<N, E>) -> String
where
    N: std::fmt::Debug,
    E: std::fmt::Debug,
{
    format!("{:?}", Dot::with_config(graph.graph(), &[]))
}

/// Dot rendering of the enabled part of the graph with `flow/capacity`
/// edge labels. Emitted by the driver at trace level.
pub fn dot_string_with_flow<F: FlowRate, N, E: FlowEdge<F>>(
    graph: &DynamicGraph<N, E>,
    flow: &Flow<F>,
) -> String {
    let body = graph
        .edge_indices()
        .filter(|&e| graph.is_enabled(e))
        .map(|e| {
            let (u, v) = graph.edge_endpoints(e);
            format!(
                "    n{} -> n{} [label=\"e{}: {}/{}\"]",
                u.index(),
                v.index(),
                e.index(),
                flow[e],
                graph.capacity::<F>(e)
            )
        })
        .join("\n");
    format!("digraph {{\n{}\n}}", body)
}

#[cfg(test)]
mod tests {
    use super::super::mocks::mock_chain_network;
    use super::*;

    #[test]
    fn dot_with_flow_labels_enabled_edges() {
        let (mut g, edges) = mock_chain_network();
        let mut flow = Flow::zero(g.edge_count());
        flow[edges[0]] = 2;
        g.disable_edge(edges[2]);

        let dot = dot_string_with_flow(&g, &flow);
        assert!(dot.contains("e0: 2/4"));
        assert!(dot.contains("e1: 0/2"));
        // disabled edges are left out
        assert!(!dot.contains("e2"));
    }

    #[test]
    fn dot_string_renders_all_edges() {
        let (g, _) = mock_chain_network();
        let dot = dot_string(&g);
        assert!(dot.contains("digraph"));
    }
}
