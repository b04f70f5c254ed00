//!
//! FlowEdge trait and the minimal capacity-only edge weight `CapEdge`
//!
use super::FlowRate;

/// Edge weight of a flow network
///
/// * `capacity()`: capacity `u(e)`, the upper limit of the flow
///
/// The capacity may be a stored constant (as in `CapEdge`) or derived on the
/// fly from other state by a custom edge-weight type.
pub trait FlowEdge<F: FlowRate> {
    /// Capacity of the edge, upper limit of the flow
    fn capacity(&self) -> F;
}

/// Edge attributes used in a capacity-only flow network.
///
/// It has
/// * Capacity u(e)
///
/// It can contain additional information in T.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CapEdgeRaw<F: FlowRate, T> {
    /// capacity (upper limit of flow) of the edge u(e)
    pub capacity: F,
    /// auxiliary informations
    pub info: T,
}

pub type CapEdge<F> = CapEdgeRaw<F, ()>;

impl<F: FlowRate> CapEdge<F> {
    pub fn new(capacity: F) -> CapEdge<F> {
        CapEdge {
            capacity,
            info: (),
        }
    }
}

impl<F: FlowRate, T> std::fmt::Display for CapEdgeRaw<F, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[0,{}]", self.capacity)
    }
}

impl<F: FlowRate, T> FlowEdge<F> for CapEdgeRaw<F, T> {
    fn capacity(&self) -> F {
        self.capacity
    }
}
