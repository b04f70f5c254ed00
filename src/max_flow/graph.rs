//! Dynamic graph definitions
//! - DynamicGraph: a DiGraph whose edges are switched on and off
//! - EdgeEvent: one entry of the append-only mutation history
//! - Version: monotonically increasing mutation counters
//!
//! Edges are never removed from the identity space; "removal" means
//! disabling. Incremental consumers read `version()` and the history log
//! to decide between cache reuse, suffix replay and full rebuild.
use super::edge::{CapEdge, FlowEdge};
use super::FlowRate;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;

/// A single topology event: an edge became enabled (addition) or disabled
/// (removal).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EdgeEvent {
    pub edge: EdgeIndex,
    pub addition: bool,
}

/// Monotonically increasing mutation counters of a `DynamicGraph`.
///
/// `modifications` advances on every enable/disable/add-edge;
/// `history_clears` advances whenever the event log loses continuity.
/// Consumers store the last version they synchronized against and compare.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct Version {
    pub modifications: u64,
    pub additions: u64,
    pub deletions: u64,
    pub history_clears: u64,
}

/// DynamicGraph definition
pub type CapGraph<F> = DynamicGraph<(), CapEdge<F>>;

/// A directed graph with switchable edges and a mutation history.
///
/// Wraps a `petgraph::DiGraph`; node and edge identities are petgraph
/// indices and stay stable for the lifetime of the graph.
#[derive(Debug, Clone)]
pub struct DynamicGraph<N = (), E = CapEdge<u64>> {
    graph: DiGraph<N, E>,
    enabled: Vec<bool>,
    history: Vec<EdgeEvent>,
    version: Version,
}

impl<N, E> DynamicGraph<N, E> {
    pub fn new() -> DynamicGraph<N, E> {
        DynamicGraph {
            graph: DiGraph::new(),
            enabled: Vec::new(),
            history: Vec::new(),
            version: Version::default(),
        }
    }

    /// The wrapped petgraph graph, for read-only structural queries.
    pub fn graph(&self) -> &DiGraph<N, E> {
        &self.graph
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_indices(&self) -> petgraph::graph::NodeIndices {
        self.graph.node_indices()
    }

    pub fn edge_indices(&self) -> petgraph::graph::EdgeIndices {
        self.graph.edge_indices()
    }

    pub fn add_node(&mut self, weight: N) -> NodeIndex {
        self.graph.add_node(weight)
    }

    /// Add a new edge. Edges are born enabled, and the addition is recorded
    /// in the history log.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex, weight: E) -> EdgeIndex {
        let edge = self.graph.add_edge(from, to, weight);
        self.enabled.push(true);
        self.push_event(edge, true);
        edge
    }

    /// Mark an edge enabled. No-op (and no history entry) if it already is.
    pub fn enable_edge(&mut self, edge: EdgeIndex) {
        if !self.enabled[edge.index()] {
            self.enabled[edge.index()] = true;
            self.push_event(edge, true);
        }
    }

    /// Mark an edge disabled. No-op (and no history entry) if it already is.
    pub fn disable_edge(&mut self, edge: EdgeIndex) {
        if self.enabled[edge.index()] {
            self.enabled[edge.index()] = false;
            self.push_event(edge, false);
        }
    }

    pub fn is_enabled(&self, edge: EdgeIndex) -> bool {
        self.enabled[edge.index()]
    }

    pub fn edge_endpoints(&self, edge: EdgeIndex) -> (NodeIndex, NodeIndex) {
        self.graph.edge_endpoints(edge).unwrap()
    }

    pub fn edge_weight(&self, edge: EdgeIndex) -> &E {
        self.graph.edge_weight(edge).unwrap()
    }

    /// Capacity of an edge as reported by its weight.
    pub fn capacity<F: FlowRate>(&self, edge: EdgeIndex) -> F
    where
        E: FlowEdge<F>,
    {
        self.edge_weight(edge).capacity()
    }

    /// Outgoing edges of a node as (head, edge) pairs, enabled or not.
    pub fn edges_out(&self, v: NodeIndex) -> impl Iterator<Item = (NodeIndex, EdgeIndex)> + '_ {
        self.graph
            .edges_directed(v, Direction::Outgoing)
            .map(|er| (er.target(), er.id()))
    }

    /// Incoming edges of a node as (tail, edge) pairs, enabled or not.
    pub fn edges_in(&self, v: NodeIndex) -> impl Iterator<Item = (NodeIndex, EdgeIndex)> + '_ {
        self.graph
            .edges_directed(v, Direction::Incoming)
            .map(|er| (er.source(), er.id()))
    }

    /// The append-only event log. Consumers remember an offset into this
    /// slice and replay only the suffix.
    pub fn history(&self) -> &[EdgeEvent] {
        &self.history
    }

    pub fn version(&self) -> Version {
        self.version
    }

    /// Drop the event log. Consumers holding an offset into the old log
    /// observe the bumped `history_clears` counter and rebuild.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.version.history_clears += 1;
    }

    fn push_event(&mut self, edge: EdgeIndex, addition: bool) {
        self.history.push(EdgeEvent { edge, addition });
        self.version.modifications += 1;
        if addition {
            self.version.additions += 1;
        } else {
            self.version.deletions += 1;
        }
    }
}

impl<N, E> Default for DynamicGraph<N, E> {
    fn default() -> Self {
        DynamicGraph::new()
    }
}
