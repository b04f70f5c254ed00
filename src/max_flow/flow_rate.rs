//!
//! FlowRate trait for generics of flow/capacity amounts
//!
//! u32, u64 and usize implement FlowRate
//!

use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

///
/// generic flow/capacity amount
///
/// Only integral types implement this trait: the minimum-cut sweep relies on
/// exact equality of `capacity - flow` with zero, and bottleneck selection
/// requires a total order.
///
pub trait FlowRate:
    Copy
    + Eq
    + Ord
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
    + Sum
    + Default
    + std::fmt::Debug
    + std::fmt::Display
{
    /// zero value = 0
    fn zero() -> Self;
    /// unit value = 1
    fn unit() -> Self;
    /// sentinel above any real capacity, used to seed search bottlenecks
    fn inf() -> Self;
}

impl FlowRate for u32 {
    fn zero() -> u32 {
        0
    }
    fn unit() -> u32 {
        1
    }
    fn inf() -> u32 {
        u32::MAX
    }
}

impl FlowRate for u64 {
    fn zero() -> u64 {
        0
    }
    fn unit() -> u64 {
        1
    }
    fn inf() -> u64 {
        u64::MAX
    }
}

impl FlowRate for usize {
    fn zero() -> usize {
        0
    }
    fn unit() -> usize {
        1
    }
    fn inf() -> usize {
        usize::MAX
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum_of<F: FlowRate>(values: &[F]) -> F {
        values.iter().copied().sum()
    }

    #[test]
    fn flow_rate_basic() {
        assert_eq!(u64::zero() + u64::unit(), 1);
        assert!(u64::zero() < u64::inf());
        assert_eq!(sum_of(&[1u32, 2, 3]), 6);
        assert_eq!(usize::default(), usize::zero());
    }
}
