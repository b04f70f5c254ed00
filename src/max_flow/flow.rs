//! Flow definitions and validity checks
//! - Flow<F>: per-edge flow values, indexed by EdgeIndex
//! - is_within_capacity / is_conserved / is_valid_flow
use super::edge::FlowEdge;
use super::graph::DynamicGraph;
use super::FlowRate;
use petgraph::graph::{EdgeIndex, NodeIndex};

/// Flow f is a mapping of an amount f(e) to each edge e, stored densely by
/// edge index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flow<F>(Vec<F>);

impl<F: FlowRate> Flow<F> {
    /// Zero flow over `n_edges` edges.
    pub fn zero(n_edges: usize) -> Flow<F> {
        Flow(vec![F::zero(); n_edges])
    }

    pub fn from_fn<G: FnMut(EdgeIndex) -> F>(n_edges: usize, mut f: G) -> Flow<F> {
        Flow((0..n_edges).map(|i| f(EdgeIndex::new(i))).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Grow to `n_edges`, filling new entries with zero. Never shrinks.
    pub fn resize(&mut self, n_edges: usize) {
        if n_edges > self.0.len() {
            self.0.resize(n_edges, F::zero());
        }
    }

    pub fn fill_zero(&mut self) {
        self.0.fill(F::zero());
    }
}

impl<F: FlowRate> std::ops::Index<EdgeIndex> for Flow<F> {
    type Output = F;
    fn index(&self, e: EdgeIndex) -> &F {
        &self.0[e.index()]
    }
}

impl<F: FlowRate> std::ops::IndexMut<EdgeIndex> for Flow<F> {
    fn index_mut(&mut self, e: EdgeIndex) -> &mut F {
        &mut self.0[e.index()]
    }
}

///
/// Sum of flow leaving `v` over enabled edges.
///
pub fn flow_out<F: FlowRate, N, E>(
    flow: &Flow<F>,
    graph: &DynamicGraph<N, E>,
    v: NodeIndex,
) -> F {
    graph
        .edges_out(v)
        .filter(|&(_, e)| graph.is_enabled(e))
        .map(|(_, e)| flow[e])
        .sum()
}

///
/// Sum of flow entering `v` over enabled edges.
///
pub fn flow_in<F: FlowRate, N, E>(flow: &Flow<F>, graph: &DynamicGraph<N, E>, v: NodeIndex) -> F {
    graph
        .edges_in(v)
        .filter(|&(_, e)| graph.is_enabled(e))
        .map(|(_, e)| flow[e])
        .sum()
}

///
/// For each enabled edge, the flow must satisfy `flow <= capacity`;
/// a disabled edge must carry exactly zero.
///
pub fn is_within_capacity<F: FlowRate, N, E: FlowEdge<F>>(
    flow: &Flow<F>,
    graph: &DynamicGraph<N, E>,
) -> bool {
    graph.edge_indices().all(|e| {
        if graph.is_enabled(e) {
            flow[e] <= graph.capacity(e)
        } else {
            flow[e] == F::zero()
        }
    })
}

///
/// For each node other than source and sink,
/// (the sum of out-going flows) should be equal to (the sum of in-coming flows).
///
pub fn is_conserved<F: FlowRate, N, E>(
    flow: &Flow<F>,
    graph: &DynamicGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> bool {
    graph
        .node_indices()
        .filter(|&v| v != source && v != sink)
        .all(|v| flow_in(flow, graph, v) == flow_out(flow, graph, v))
}

///
/// Check if the flow is a feasible source->sink flow of the given value:
/// - capacity constraint on every edge, zero on disabled edges
/// - flow constraint on every non-terminal node
/// - net outflow at the source and net inflow at the sink both equal `value`
///
pub fn is_valid_flow<F: FlowRate, N, E: FlowEdge<F>>(
    flow: &Flow<F>,
    graph: &DynamicGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
    value: F,
) -> bool {
    is_within_capacity(flow, graph)
        && is_conserved(flow, graph, source, sink)
        && flow_out(flow, graph, source) == value + flow_in(flow, graph, source)
        && flow_in(flow, graph, sink) == value + flow_out(flow, graph, sink)
}
