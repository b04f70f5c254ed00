//! Incremental maximum flow / minimum cut over a graph with switchable edges
//!
//! The caller mutates a [`DynamicGraph`] (enabling and disabling edges) and
//! queries an [`IncrementalMaxFlow`] between mutations; the engine replays
//! only the unseen part of the graph's mutation history, falling back to a
//! from-scratch computation only when the history lost continuity.
pub mod edge;
pub mod flow;
pub mod flow_rate;
pub mod graph;
pub mod incremental;
pub mod mocks;
pub mod search;
pub mod utils;

pub use edge::{CapEdge, CapEdgeRaw, FlowEdge};
pub use flow::Flow;
pub use flow_rate::FlowRate;
pub use graph::{CapGraph, DynamicGraph, EdgeEvent, Version};
pub use incremental::{CutEdge, IncrementalMaxFlow, SyncStats};

use petgraph::graph::NodeIndex;

//
// public functions
//

///
/// Compute the maximum source->sink flow over the currently enabled edges,
/// from scratch, with a throwaway engine. For repeated queries against a
/// mutating graph, keep an [`IncrementalMaxFlow`] instead.
///
pub fn max_flow<F: FlowRate, N, E: FlowEdge<F>>(
    graph: &DynamicGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> F {
    IncrementalMaxFlow::new().max_flow(graph, source, sink)
}

///
/// Compute the maximum flow value together with a minimum edge cut, from
/// scratch, with a throwaway engine.
///
pub fn min_cut<F: FlowRate, N, E: FlowEdge<F>>(
    graph: &DynamicGraph<N, E>,
    source: NodeIndex,
    sink: NodeIndex,
) -> (F, Vec<CutEdge>) {
    IncrementalMaxFlow::new().min_cut(graph, source, sink)
}
