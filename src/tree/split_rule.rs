//! This file defines the split rule of the internal nodes.


/// The output of [`Node::route`](super::Node::route).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftRight {
    /// Descend into the left child.
    Left,
    /// Descend into the right child.
    Right,
}


/// Routes `value` against `threshold`.
/// Ties go to the left child.
#[inline(always)]
pub(crate) fn split(value: f64, threshold: f64) -> LeftRight {
    if value <= threshold {
        LeftRight::Left
    } else {
        LeftRight::Right
    }
}
