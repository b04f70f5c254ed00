//! Breadth-first augmenting-path search over the residual graph
//! - ResidueDirection: which way an original edge is traversed
//! - VirtualArc: a point-to-point arc spliced into a search
//! - SearchScratch: reusable per-node search state
//!
//! A forward residual arc exists wherever `capacity - flow > 0`; a backward
//! residual arc exists wherever the original edge carries positive flow.
//! The search is breadth-first with early exit, so the path found is a
//! minimum-hop augmenting path (Edmonds-Karp).
use super::edge::FlowEdge;
use super::flow::Flow;
use super::graph::DynamicGraph;
use super::FlowRate;
use petgraph::graph::{EdgeIndex, NodeIndex};
use std::collections::VecDeque;

/// Residue direction enum
/// a residual arc has two types
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ResidueDirection {
    /// Forward arc: traversing it increases the flow on the original edge
    Forward,
    /// Backward arc: traversing it decreases the flow on the original edge
    Backward,
}

/// Predecessor record of a visited node
#[derive(Debug, Copy, Clone)]
pub struct ParentLink {
    /// the node this one was reached from
    pub node: NodeIndex,
    /// the original edge traversed; `None` when the node was reached
    /// through the injected virtual arc
    pub edge: Option<EdgeIndex>,
    pub direction: ResidueDirection,
}

/// A bounded point-to-point arc spliced into a search without existing in
/// the graph. `used` accumulates over the augmenting rounds of one query.
#[derive(Debug, Clone)]
pub struct VirtualArc<F: FlowRate> {
    pub from: NodeIndex,
    pub to: NodeIndex,
    pub capacity: F,
    pub used: F,
}

impl<F: FlowRate> VirtualArc<F> {
    pub fn new(from: NodeIndex, to: NodeIndex, capacity: F) -> VirtualArc<F> {
        VirtualArc {
            from,
            to,
            capacity,
            used: F::zero(),
        }
    }

    fn residual(&self) -> F {
        self.capacity - self.used
    }
}

/// Reusable per-node search state: parent links, running bottlenecks and
/// the FIFO frontier. Resized (never shrunk) to the node count before each
/// search.
#[derive(Debug)]
pub struct SearchScratch<F: FlowRate> {
    parent: Vec<Option<ParentLink>>,
    bottleneck: Vec<F>,
    queue: VecDeque<NodeIndex>,
}

impl<F: FlowRate> SearchScratch<F> {
    pub fn new() -> SearchScratch<F> {
        SearchScratch {
            parent: Vec::new(),
            bottleneck: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    fn prepare(&mut self, n_nodes: usize) {
        if self.parent.len() < n_nodes {
            self.parent.resize(n_nodes, None);
            self.bottleneck.resize(n_nodes, F::zero());
        }
        self.parent.fill(None);
        self.queue.clear();
    }

    /// One breadth-first pass over the residual graph restricted to edges
    /// marked in `enabled`. Returns the sink's bottleneck (capped at
    /// `limit`), or zero when the sink is unreachable.
    pub fn breadth_first<N, E: FlowEdge<F>>(
        &mut self,
        graph: &DynamicGraph<N, E>,
        enabled: &[bool],
        flow: &Flow<F>,
        source: NodeIndex,
        sink: NodeIndex,
        limit: F,
        virt: Option<&VirtualArc<F>>,
    ) -> F {
        self.prepare(graph.node_count());
        self.bottleneck[source.index()] = limit;
        self.queue.push_back(source);

        while let Some(u) = self.queue.pop_front() {
            if let Some(virt) = virt {
                if virt.from == u && virt.residual() > F::zero() {
                    let link = ParentLink {
                        node: u,
                        edge: None,
                        direction: ResidueDirection::Forward,
                    };
                    if let Some(b) = self.visit(virt.to, source, sink, link, virt.residual()) {
                        return b;
                    }
                }
            }

            for (v, e) in graph.edges_out(u) {
                if !enabled[e.index()] {
                    continue;
                }
                let residual = graph.capacity(e) - flow[e];
                if residual > F::zero() {
                    let link = ParentLink {
                        node: u,
                        edge: Some(e),
                        direction: ResidueDirection::Forward,
                    };
                    if let Some(b) = self.visit(v, source, sink, link, residual) {
                        return b;
                    }
                }
            }

            for (v, e) in graph.edges_in(u) {
                if !enabled[e.index()] {
                    continue;
                }
                let residual = flow[e];
                if residual > F::zero() {
                    let link = ParentLink {
                        node: u,
                        edge: Some(e),
                        direction: ResidueDirection::Backward,
                    };
                    if let Some(b) = self.visit(v, source, sink, link, residual) {
                        return b;
                    }
                }
            }
        }
        F::zero()
    }

    /// Record `link` for `v` unless it was already visited. Returns the
    /// sink bottleneck when `v` is the sink (early exit).
    fn visit(
        &mut self,
        v: NodeIndex,
        source: NodeIndex,
        sink: NodeIndex,
        link: ParentLink,
        residual: F,
    ) -> Option<F> {
        if v == source || self.parent[v.index()].is_some() {
            return None;
        }
        let b = self.bottleneck[link.node.index()].min(residual);
        self.parent[v.index()] = Some(link);
        self.bottleneck[v.index()] = b;
        if v == sink {
            Some(b)
        } else {
            self.queue.push_back(v);
            None
        }
    }

    /// Walk the parent chain from the sink back to the source, moving
    /// `amount` units of flow along it. Returns true when the chain passed
    /// through the virtual arc.
    fn augment(&self, flow: &mut Flow<F>, source: NodeIndex, sink: NodeIndex, amount: F) -> bool {
        let mut via_virtual = false;
        let mut v = sink;
        while v != source {
            let link = self.parent[v.index()].expect("broken parent chain");
            match link.edge {
                Some(e) => match link.direction {
                    ResidueDirection::Forward => flow[e] += amount,
                    ResidueDirection::Backward => flow[e] -= amount,
                },
                None => via_virtual = true,
            }
            v = link.node;
        }
        via_virtual
    }

    /// Repeat search + augment until no augmenting path remains or `bound`
    /// is exhausted. Returns the amount of flow moved from `source` to
    /// `sink`; the flow array is updated in place.
    pub fn saturate<N, E: FlowEdge<F>>(
        &mut self,
        graph: &DynamicGraph<N, E>,
        enabled: &[bool],
        flow: &mut Flow<F>,
        source: NodeIndex,
        sink: NodeIndex,
        bound: Option<F>,
        mut virt: Option<&mut VirtualArc<F>>,
    ) -> F {
        let mut gained = F::zero();
        loop {
            let limit = match bound {
                Some(b) if gained >= b => break,
                Some(b) => b - gained,
                None => F::inf(),
            };
            let m = self.breadth_first(graph, enabled, flow, source, sink, limit, virt.as_deref());
            if m == F::zero() {
                break;
            }
            if self.augment(flow, source, sink, m) {
                if let Some(virt) = virt.as_deref_mut() {
                    virt.used += m;
                }
            }
            gained += m;
        }
        gained
    }
}

impl<F: FlowRate> Default for SearchScratch<F> {
    fn default() -> Self {
        SearchScratch::new()
    }
}

//
// tests
//
#[cfg(test)]
mod tests {
    use super::super::mocks::{mock_chain_network, mock_cross_network};
    use super::*;

    fn all_enabled<N, E>(graph: &DynamicGraph<N, E>) -> Vec<bool> {
        graph.edge_indices().map(|e| graph.is_enabled(e)).collect()
    }

    #[test]
    fn breadth_first_finds_the_bottleneck() {
        let (g, _) = mock_chain_network();
        let (s, t) = (NodeIndex::new(0), NodeIndex::new(3));
        let enabled = all_enabled(&g);
        let flow = Flow::zero(g.edge_count());
        let mut scratch = SearchScratch::new();
        let b = scratch.breadth_first(&g, &enabled, &flow, s, t, u64::inf(), None);
        assert_eq!(b, 2);
    }

    #[test]
    fn breadth_first_respects_the_limit() {
        let (g, _) = mock_chain_network();
        let (s, t) = (NodeIndex::new(0), NodeIndex::new(3));
        let enabled = all_enabled(&g);
        let flow = Flow::zero(g.edge_count());
        let mut scratch = SearchScratch::new();
        let b = scratch.breadth_first(&g, &enabled, &flow, s, t, 1, None);
        assert_eq!(b, 1);
    }

    #[test]
    fn saturate_reaches_the_maximum() {
        let (g, _) = mock_cross_network();
        let (s, t) = (NodeIndex::new(0), NodeIndex::new(3));
        let enabled = all_enabled(&g);
        let mut flow = Flow::zero(g.edge_count());
        let mut scratch = SearchScratch::new();
        let total = scratch.saturate(&g, &enabled, &mut flow, s, t, None, None);
        assert_eq!(total, 5);
    }

    #[test]
    fn saturate_honors_the_bound() {
        let (g, _) = mock_cross_network();
        let (s, t) = (NodeIndex::new(0), NodeIndex::new(3));
        let enabled = all_enabled(&g);
        let mut flow = Flow::zero(g.edge_count());
        let mut scratch = SearchScratch::new();
        let total = scratch.saturate(&g, &enabled, &mut flow, s, t, Some(3), None);
        assert_eq!(total, 3);
    }

    #[test]
    fn virtual_arc_bridges_a_gap() {
        // s --4--> a    b --3--> t, bridged by a virtual arc a -> b
        let (mut g, edges) = mock_chain_network();
        let (s, t) = (NodeIndex::new(0), NodeIndex::new(3));
        g.disable_edge(edges[1]);
        let enabled = all_enabled(&g);
        let mut flow = Flow::zero(g.edge_count());
        let mut scratch = SearchScratch::new();

        // unreachable without the bridge
        let b = scratch.breadth_first(&g, &enabled, &flow, s, t, u64::inf(), None);
        assert_eq!(b, 0);

        let mut virt = VirtualArc::new(NodeIndex::new(1), NodeIndex::new(2), 2);
        let total = scratch.saturate(&g, &enabled, &mut flow, s, t, None, Some(&mut virt));
        assert_eq!(total, 2);
        assert_eq!(virt.used, 2);
        // the real edges carry the flow, the virtual arc absorbed the rest
        assert_eq!(flow[edges[0]], 2);
        assert_eq!(flow[edges[1]], 0);
        assert_eq!(flow[edges[2]], 2);
    }
}
