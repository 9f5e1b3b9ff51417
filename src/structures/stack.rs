//! LIFO stack over a dense buffer

use super::element::Element;
use super::{Phase, PlannedStep, SlotView};

/// Pseudocode displayed while a push runs.
pub const PUSH_CODE: [&str; 3] = [
    "if length == capacity: error Overflow",
    "buffer[length] = value",
    "length = length + 1",
];

/// Pseudocode displayed while a pop runs.
pub const POP_CODE: [&str; 3] = [
    "if length == 0: error Underflow",
    "value = buffer[length - 1]",
    "length = length - 1",
];

/// Fixed-capacity stack. Dense: the buffer never has internal gaps and the
/// last element is always the unique pop candidate.
#[derive(Debug, Clone)]
pub struct Stack {
    items: Vec<Element>,
    capacity: usize,
}

impl Stack {
    pub fn new(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    pub fn items(&self) -> &[Element] {
        &self.items
    }

    /// Phase sequence for a push. The overflow check runs first; if it
    /// fails, the remaining phases are discarded by the engine.
    pub fn plan_push(&self) -> Vec<PlannedStep> {
        vec![
            PlannedStep::new(Phase::OverflowCheck, 0),
            PlannedStep::new(Phase::Insert { index: self.items.len() }, 1),
        ]
    }

    pub fn plan_pop(&self) -> Vec<PlannedStep> {
        vec![
            PlannedStep::new(Phase::UnderflowCheck, 0),
            PlannedStep::new(
                Phase::Remove {
                    index: self.items.len().saturating_sub(1),
                },
                1,
            ),
        ]
    }

    /// Append to the top. Caller has already passed the overflow check.
    pub fn commit_push(&mut self, elem: Element) -> usize {
        self.items.push(elem);
        self.items.len() - 1
    }

    /// Remove the top element, if any.
    pub fn commit_pop(&mut self) -> Option<(usize, Element)> {
        let elem = self.items.pop()?;
        Some((self.items.len(), elem))
    }

    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Replace the contents with `elems` (oldest first), truncated to
    /// capacity.
    pub fn bulk_fill(&mut self, mut elems: Vec<Element>) {
        elems.truncate(self.capacity);
        self.items = elems;
    }

    pub fn slot_views(&self) -> Vec<SlotView<'_>> {
        (0..self.capacity)
            .map(|i| match self.items.get(i) {
                Some(e) => SlotView::Occupied(e),
                None => SlotView::Empty,
            })
            .collect()
    }
}
