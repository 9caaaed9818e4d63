//! Doubly linked list stored in an arena.
//!
//! Nodes live in a `Vec` of slots and point at each other by index. A deleted
//! node's slot goes on a free list and is reused by the next insert; its
//! generation is bumped so an old [`NodeId`] can never reach the new occupant.

use super::SlotId;

/// Handle to a node of a [`DoublyLinkedList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(SlotId);

#[derive(Debug, Clone)]
struct Node<T> {
    key: T,
    prev: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

#[derive(Debug, Clone)]
pub struct DoublyLinkedList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        DoublyLinkedList::new()
    }
}

impl<T> DoublyLinkedList<T> {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        DoublyLinkedList { slots: Vec::new(), free: Vec::new(), head: None, tail: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append `key` after the current tail and return its handle.
    pub fn insert(&mut self, key: T) -> NodeId {
        let node = Node { key, prev: self.tail, next: None };

        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index].node = Some(node);
                index
            }
            None => {
                self.slots.push(Slot { generation: 0, node: Some(node) });
                self.slots.len() - 1
            }
        };

        match self.tail {
            Some(tail) => self.node_mut(tail).next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;

        self.id_of(index)
    }

    /// Unlink the node behind `id` and hand back its key.
    ///
    /// Returns `None` if `id` was already deleted.
    pub fn delete(&mut self, id: NodeId) -> Option<T> {
        let index = self.live_index(id)?;
        let slot = &mut self.slots[index];
        let node = slot.node.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(index);

        match node.prev {
            Some(prev) => self.node_mut(prev).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;

        Some(node.key)
    }

    pub fn head(&self) -> Option<NodeId> {
        self.head.map(|index| self.id_of(index))
    }

    pub fn tail(&self) -> Option<NodeId> {
        self.tail.map(|index| self.id_of(index))
    }

    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.live_node(id).map(|node| &node.key)
    }

    pub fn next(&self, id: NodeId) -> Option<NodeId> {
        self.live_node(id)?.next.map(|index| self.id_of(index))
    }

    pub fn prev(&self, id: NodeId) -> Option<NodeId> {
        self.live_node(id)?.prev.map(|index| self.id_of(index))
    }

    /// Keys from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, cursor: self.head }
    }

    fn id_of(&self, index: usize) -> NodeId {
        NodeId(SlotId { index, generation: self.slots[index].generation })
    }

    fn live_index(&self, id: NodeId) -> Option<usize> {
        let slot = self.slots.get(id.0.index)?;
        (slot.generation == id.0.generation && slot.node.is_some()).then_some(id.0.index)
    }

    fn live_node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slots[self.live_index(id)?].node.as_ref()
    }

    // Links only ever point at occupied slots
    fn node_mut(&mut self, index: usize) -> &mut Node<T> {
        match self.slots[index].node.as_mut() {
            Some(node) => node,
            None => unreachable!("list link points at an empty slot {index}"),
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    cursor: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let list = self.list;
        let node = list.slots[self.cursor?].node.as_ref()?;
        self.cursor = node.next;
        Some(&node.key)
    }
}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> FromIterator<T> for DoublyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = DoublyLinkedList::new();
        for key in iter {
            list.insert(key);
        }
        list
    }
}

impl<T: Clone> From<&[T]> for DoublyLinkedList<T> {
    fn from(keys: &[T]) -> Self {
        keys.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &DoublyLinkedList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_insert_into_empty_list() {
        let mut list = DoublyLinkedList::new();
        let id = list.insert(10);
        assert_eq!(list.head(), Some(id));
        assert_eq!(list.tail(), Some(id));
        assert_eq!(list.get(id), Some(&10));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_insert_keeps_head() {
        let mut list = DoublyLinkedList::from(&[3][..]);
        list.insert(10);
        list.insert(7);
        assert_eq!(list.head().and_then(|id| list.get(id)), Some(&3));
        assert_eq!(list.tail().and_then(|id| list.get(id)), Some(&7));
    }

    #[test]
    fn test_links() {
        let mut list = DoublyLinkedList::new();
        let ids: Vec<NodeId> = (1..=4).map(|k| list.insert(k)).collect();

        assert_eq!(list.head(), Some(ids[0]));
        assert_eq!(list.tail(), Some(ids[3]));
        for pair in ids.windows(2) {
            assert_eq!(list.next(pair[0]), Some(pair[1]));
            assert_eq!(list.prev(pair[1]), Some(pair[0]));
        }
        assert_eq!(list.prev(ids[0]), None);
        assert_eq!(list.next(ids[3]), None);
    }

    #[test]
    fn test_delete_head_and_tail_leaves_empty_list() {
        let mut list: DoublyLinkedList<i32> = [1, 2].into_iter().collect();
        let head = list.head().unwrap();
        assert_eq!(list.delete(head), Some(1));
        let tail = list.tail().unwrap();
        assert_eq!(list.delete(tail), Some(2));

        assert_eq!(list.head(), None);
        assert_eq!(list.tail(), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_delete_head_and_tail_leaves_middle() {
        let mut list: DoublyLinkedList<i32> = [1, 2, 3].into_iter().collect();
        list.delete(list.head().unwrap());
        list.delete(list.tail().unwrap());

        assert_eq!(list.head(), list.tail());
        assert_eq!(list.head().and_then(|id| list.get(id)), Some(&2));
        let only = list.head().unwrap();
        assert_eq!(list.next(only), None);
        assert_eq!(list.prev(only), None);
    }

    #[test]
    fn test_delete_middle_relinks_neighbours() {
        let mut list = DoublyLinkedList::new();
        let a = list.insert(1);
        let b = list.insert(2);
        let c = list.insert(3);
        assert_eq!(list.delete(b), Some(2));
        assert_eq!(list.next(a), Some(c));
        assert_eq!(list.prev(c), Some(a));
        assert_eq!(keys(&list), vec![1, 3]);
    }

    #[test]
    fn test_stale_id_is_rejected() {
        let mut list = DoublyLinkedList::new();
        let old = list.insert(1);
        assert_eq!(list.delete(old), Some(1));
        assert_eq!(list.delete(old), None);

        // The freed slot is reused, but the old handle still misses
        let new = list.insert(2);
        assert_ne!(old, new);
        assert_eq!(list.get(old), None);
        assert_eq!(list.get(new), Some(&2));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_reuse_keeps_order() {
        let mut list: DoublyLinkedList<i32> = (1..=3).collect();
        list.delete(list.head().unwrap());
        list.insert(4);
        list.insert(5);
        assert_eq!(keys(&list), vec![2, 3, 4, 5]);
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_iterate_by_reference() {
        let list: DoublyLinkedList<&str> = ["a", "b"].into_iter().collect();
        let joined: String = (&list).into_iter().copied().collect();
        assert_eq!(joined, "ab");
    }
}
