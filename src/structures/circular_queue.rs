//! Circular queue (ring buffer) over a slotted buffer
//!
//! Unlike the linear queue, dequeued slots come back into rotation: `rear`
//! wraps to slot 0 via modulo arithmetic. Empty is the `-1` pointer
//! sentinel, so every slot is usable; full is `(rear + 1) % capacity ==
//! front`, and that check runs before the empty special case.

use super::element::Element;
use super::{Phase, PlannedStep, SlotView};

pub const ENQUEUE_CODE: [&str; 4] = [
    "if (rear + 1) % capacity == front: error Overflow",
    "if front == -1: front = rear = 0",
    "else: rear = (rear + 1) % capacity",
    "buffer[rear] = value",
];

pub const DEQUEUE_CODE: [&str; 5] = [
    "if front == -1: error Underflow",
    "value = buffer[front]",
    "buffer[front] = empty",
    "if front == rear: front = rear = -1",
    "else: front = (front + 1) % capacity",
];

#[derive(Debug, Clone)]
pub struct CircularQueue {
    slots: Vec<Option<Element>>,
    front: i32,
    rear: i32,
}

impl CircularQueue {
    pub fn new(capacity: usize) -> Self {
        CircularQueue {
            slots: vec![None; capacity],
            front: -1,
            rear: -1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// `(front, rear)` with `-1` meaning empty.
    pub fn pointers(&self) -> (i32, i32) {
        (self.front, self.rear)
    }

    pub fn is_empty(&self) -> bool {
        self.front == -1
    }

    pub fn is_full(&self) -> bool {
        self.front != -1 && (self.rear + 1) % self.capacity() as i32 == self.front
    }

    pub fn occupancy(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            let cap = self.capacity() as i32;
            ((self.rear - self.front).rem_euclid(cap) + 1) as usize
        }
    }

    pub fn plan_enqueue(&self) -> Vec<PlannedStep> {
        let index = if self.front == -1 {
            0
        } else {
            (self.rear as usize + 1) % self.capacity()
        };
        vec![
            PlannedStep::new(Phase::OverflowCheck, 0),
            PlannedStep::new(Phase::Insert { index }, 3),
        ]
    }

    pub fn plan_dequeue(&self) -> Vec<PlannedStep> {
        let index = self.front.max(0) as usize;
        vec![
            PlannedStep::new(Phase::UnderflowCheck, 0),
            PlannedStep::new(Phase::Remove { index }, 2),
        ]
    }

    pub fn commit_enqueue(&mut self, elem: Element) -> usize {
        if self.front == -1 {
            self.front = 0;
            self.rear = 0;
        } else {
            self.rear = (self.rear + 1) % self.capacity() as i32;
        }
        let index = self.rear as usize;
        self.slots[index] = Some(elem);
        index
    }

    /// Clear the slot at `front`; removing the last element resets both
    /// pointers to `-1`.
    pub fn commit_dequeue(&mut self) -> Option<(usize, Element)> {
        if self.front == -1 {
            return None;
        }
        let index = self.front as usize;
        let elem = self.slots[index].take()?;
        if self.front == self.rear {
            self.front = -1;
            self.rear = -1;
        } else {
            self.front = (self.front + 1) % self.capacity() as i32;
        }
        Some((index, elem))
    }

    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.front = -1;
        self.rear = -1;
    }

    /// Replace the contents with `elems` placed from slot `start`, wrapping.
    pub fn bulk_fill(&mut self, mut elems: Vec<Element>, start: usize) {
        self.reset();
        elems.truncate(self.capacity());
        if elems.is_empty() {
            return;
        }
        let cap = self.capacity();
        let start = start % cap;
        let n = elems.len();
        for (k, elem) in elems.into_iter().enumerate() {
            self.slots[(start + k) % cap] = Some(elem);
        }
        self.front = start as i32;
        self.rear = ((start + n - 1) % cap) as i32;
    }

    pub fn slot_views(&self) -> Vec<SlotView<'_>> {
        self.slots
            .iter()
            .map(|slot| match slot {
                Some(e) => SlotView::Occupied(e),
                None => SlotView::Empty,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elem(id: u64, value: i64) -> Element {
        Element::new(id, value)
    }

    #[test]
    fn rear_wraps_to_slot_zero() {
        let mut q = CircularQueue::new(4);
        for i in 0..4 {
            q.commit_enqueue(elem(i, i as i64));
        }
        assert!(q.is_full());
        let (index, removed) = q.commit_dequeue().expect("dequeue");
        assert_eq!(index, 0);
        assert_eq!(removed.value, 0);
        // The freed slot is reused: rear wraps from 3 back to 0.
        let index = q.commit_enqueue(elem(4, 40));
        assert_eq!(index, 0);
        assert_eq!(q.pointers(), (1, 0));
        assert!(q.is_full());
    }

    #[test]
    fn removing_last_element_resets_pointers() {
        let mut q = CircularQueue::new(4);
        q.commit_enqueue(elem(0, 7));
        q.commit_dequeue().expect("dequeue");
        assert_eq!(q.pointers(), (-1, -1));
        assert!(q.is_empty());
        assert!(!q.is_full());
    }

    #[test]
    fn wrapped_bulk_fill_sets_pointers() {
        let mut q = CircularQueue::new(5);
        let elems = (0..3).map(|i| elem(i, i as i64)).collect();
        q.bulk_fill(elems, 4);
        assert_eq!(q.pointers(), (4, 1));
        assert_eq!(q.occupancy(), 3);
    }
}
