//!
//! dynflow maintains a [maximum flow](https://en.wikipedia.org/wiki/Maximum_flow_problem)
//! (and its dual minimum cut) over a directed graph whose edges are repeatedly
//! enabled and disabled by the caller, updating the cached flow incrementally
//! instead of recomputing from scratch after every mutation.
//!
pub mod max_flow;
