//! Index-based linked containers.
//!
//! Both containers keep their nodes in a `Vec` and link them by slot index, with a
//! free list of vacated slots. Nothing holds a reference to another node.

pub mod list;
pub mod queue;

pub use list::{DoublyLinkedList, NodeId};
pub use queue::Queue;

/// Position of a node in an arena, plus the generation the slot had when the
/// node was stored there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct SlotId {
    pub(crate) index: usize,
    pub(crate) generation: u32,
}
