//! First-in, first-out queue over an arena of singly linked nodes.
//!
//! `enqueue` links a node after the tail, `dequeue` unlinks the head. Vacated
//! slots are recycled through a free list, so a queue that keeps cycling a
//! bounded number of items never grows its arena.

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct Queue<T> {
    slots: Vec<Option<Node<T>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> Queue<T> {
    /// An empty queue.
    #[must_use]
    pub fn new() -> Self {
        Queue { slots: Vec::new(), free: Vec::new(), head: None, tail: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Add `data` at the back.
    pub fn enqueue(&mut self, data: T) {
        let node = Some(Node { data, next: None });
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index] = node;
                index
            }
            None => {
                self.slots.push(node);
                self.slots.len() - 1
            }
        };

        match self.tail.and_then(|tail| self.slots[tail].as_mut()) {
            Some(tail) => tail.next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
        self.len += 1;
    }

    /// Remove and return the front item, or `None` if the queue is empty.
    pub fn dequeue(&mut self) -> Option<T> {
        let index = self.head?;
        let node = self.slots[index].take()?;
        self.free.push(index);

        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;

        Some(node.data)
    }

    /// The front item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.slots[self.head?].as_ref().map(|node| &node.data)
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        for data in iter {
            queue.enqueue(data);
        }
        queue
    }
}

impl<T: Clone> From<&[T]> for Queue<T> {
    fn from(data: &[T]) -> Self {
        data.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(queue: &mut Queue<i32>) -> Vec<i32> {
        std::iter::from_fn(|| queue.dequeue()).collect()
    }

    #[test]
    fn test_enqueue_to_empty_queue() {
        let mut queue = Queue::new();
        queue.enqueue(10);
        assert_eq!(queue.peek(), Some(&10));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_enqueue_into_non_empty_queue() {
        let mut queue: Queue<i32> = [1, 1].into_iter().collect();
        for data in [2, 3, 4] {
            queue.enqueue(data);
        }
        assert_eq!(queue.len(), 5);
        assert_eq!(drain(&mut queue), vec![1, 1, 2, 3, 4]);
    }

    #[test]
    fn test_dequeue_from_empty_queue() {
        let mut queue: Queue<i32> = Queue::new();
        assert_eq!(queue.dequeue(), None);
        assert_eq!(queue.peek(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_drained_queue_is_reusable() {
        let mut queue = Queue::from(&[1, 2][..]);
        assert_eq!(drain(&mut queue), vec![1, 2]);
        assert!(queue.is_empty());

        queue.enqueue(3);
        assert_eq!(queue.peek(), Some(&3));
        assert_eq!(drain(&mut queue), vec![3]);
    }

    #[test]
    fn test_slots_are_recycled() {
        let mut queue = Queue::new();
        for round in 0..100 {
            queue.enqueue(round);
            queue.enqueue(round + 1);
            assert_eq!(queue.dequeue(), Some(round));
            assert_eq!(queue.dequeue(), Some(round + 1));
        }
        assert!(queue.slots.len() <= 2);
    }

    #[test]
    fn test_interleaved_fifo_order() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.dequeue(), Some(1));
        queue.enqueue(3);
        assert_eq!(drain(&mut queue), vec![2, 3]);
        assert_eq!(queue.len(), 0);
    }
}
