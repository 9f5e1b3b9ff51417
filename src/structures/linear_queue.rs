//! Linear (non-circular) queue over a slotted buffer
//!
//! `front`/`rear` only ever advance. Slots behind `front` stay spent until an
//! explicit reset, and `enqueue` refuses once `rear` reaches the last slot
//! even if earlier slots were vacated. That limitation is the exhibit: the
//! circular queue exists to contrast with it.

use super::element::Element;
use super::{Phase, PlannedStep, SlotView};

pub const ENQUEUE_CODE: [&str; 4] = [
    "if rear == capacity - 1: error Overflow",
    "if front == -1: front = 0",
    "rear = rear + 1",
    "buffer[rear] = value",
];

pub const DEQUEUE_CODE: [&str; 4] = [
    "if front == -1 or front > rear: error Underflow",
    "value = buffer[front]",
    "buffer[front] = empty",
    "front = front + 1",
];

#[derive(Debug, Clone)]
pub struct LinearQueue {
    slots: Vec<Option<Element>>,
    front: i32,
    rear: i32,
}

impl LinearQueue {
    pub fn new(capacity: usize) -> Self {
        LinearQueue {
            slots: vec![None; capacity],
            front: -1,
            rear: -1,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// `(front, rear)` with `-1` meaning "no elements ever placed".
    pub fn pointers(&self) -> (i32, i32) {
        (self.front, self.rear)
    }

    pub fn is_empty(&self) -> bool {
        self.front == -1 || self.front > self.rear
    }

    /// Full the moment `rear` hits the last slot. Vacated slots before
    /// `front` do not count: there is no compaction.
    pub fn is_full(&self) -> bool {
        self.rear == self.capacity() as i32 - 1
    }

    pub fn occupancy(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            (self.rear - self.front + 1) as usize
        }
    }

    pub fn plan_enqueue(&self) -> Vec<PlannedStep> {
        let index = (self.rear + 1).max(0) as usize;
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

    /// Store at `rear + 1`. First insertion sets `front = rear = 0`.
    pub fn commit_enqueue(&mut self, elem: Element) -> usize {
        if self.front == -1 {
            self.front = 0;
        }
        self.rear += 1;
        let index = self.rear as usize;
        self.slots[index] = Some(elem);
        index
    }

    /// Clear the slot at `front` and advance it. After the last element the
    /// queue is logically empty but the slots stay spent.
    pub fn commit_dequeue(&mut self) -> Option<(usize, Element)> {
        if self.is_empty() {
            return None;
        }
        let index = self.front as usize;
        let elem = self.slots[index].take()?;
        self.front += 1;
        Some((index, elem))
    }

    /// The only way to reclaim spent slots.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|s| *s = None);
        self.front = -1;
        self.rear = -1;
    }

    /// Replace the contents with `elems` placed contiguously from slot 0.
    pub fn bulk_fill(&mut self, mut elems: Vec<Element>) {
        self.reset();
        elems.truncate(self.capacity());
        if elems.is_empty() {
            return;
        }
        self.front = 0;
        self.rear = elems.len() as i32 - 1;
        for (i, elem) in elems.into_iter().enumerate() {
            self.slots[i] = Some(elem);
        }
    }

    pub fn slot_views(&self) -> Vec<SlotView<'_>> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| match slot {
                Some(e) => SlotView::Occupied(e),
                None if self.front != -1 && (i as i32) < self.front => SlotView::Spent,
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
    fn spent_slots_are_not_reused() {
        let mut q = LinearQueue::new(4);
        for i in 0..4 {
            q.commit_enqueue(elem(i, i as i64));
        }
        assert!(q.is_full());
        q.commit_dequeue().expect("dequeue");
        // One slot free at the front, but rear already hit the last slot.
        assert!(q.is_full());
        assert_eq!(q.occupancy(), 3);
    }

    #[test]
    fn drained_queue_is_empty_but_spent() {
        let mut q = LinearQueue::new(4);
        q.commit_enqueue(elem(0, 1));
        q.commit_enqueue(elem(1, 2));
        q.commit_dequeue().expect("dequeue");
        q.commit_dequeue().expect("dequeue");
        assert!(q.is_empty());
        let (front, rear) = q.pointers();
        assert!(front > rear);
        assert!(matches!(q.slot_views()[0], SlotView::Spent));
        q.reset();
        assert_eq!(q.pointers(), (-1, -1));
        assert!(matches!(q.slot_views()[0], SlotView::Empty));
    }
}
