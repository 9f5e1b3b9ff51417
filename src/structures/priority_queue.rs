//! Priority queue over a dense, always-sorted buffer
//!
//! Insertion is a visible linear scan, not a heap: every examined index is a
//! `Compare` phase the trace pane can show. Ties are stable (a new element
//! goes after existing equal values), so the head at index 0 is always the
//! oldest element of the highest priority.

use super::element::Element;
use super::{Phase, PlannedStep, PriorityMode, SlotView};

pub const INSERT_MAX_CODE: [&str; 5] = [
    "if length == capacity: error Overflow",
    "i = 0",
    "while i < length and buffer[i] >= value: i = i + 1",
    "shift buffer[i..] one slot right",
    "buffer[i] = value",
];

pub const INSERT_MIN_CODE: [&str; 5] = [
    "if length == capacity: error Overflow",
    "i = 0",
    "while i < length and buffer[i] <= value: i = i + 1",
    "shift buffer[i..] one slot right",
    "buffer[i] = value",
];

pub const REMOVE_CODE: [&str; 3] = [
    "if length == 0: error Underflow",
    "value = buffer[0]",
    "shift buffer one slot left",
];

#[derive(Debug, Clone)]
pub struct PriorityQueue {
    items: Vec<Element>,
    capacity: usize,
    mode: PriorityMode,
}

impl PriorityQueue {
    pub fn new(capacity: usize, mode: PriorityMode) -> Self {
        PriorityQueue {
            items: Vec::with_capacity(capacity),
            capacity,
            mode,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn mode(&self) -> PriorityMode {
        self.mode
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

    pub fn insert_code(&self) -> &'static [&'static str] {
        match self.mode {
            PriorityMode::Max => &INSERT_MAX_CODE,
            PriorityMode::Min => &INSERT_MIN_CODE,
        }
    }

    /// First index where `value` outranks the stored element; equal values
    /// are skipped, which keeps ties in insertion order.
    fn insertion_point(&self, value: i64) -> usize {
        let beats = |stored: i64| match self.mode {
            PriorityMode::Max => value > stored,
            PriorityMode::Min => value < stored,
        };
        self.items
            .iter()
            .position(|e| beats(e.value))
            .unwrap_or(self.items.len())
    }

    /// Phase sequence for an insert: the overflow check, one `Compare` per
    /// examined index, then the placement itself.
    pub fn plan_insert(&self, value: i64) -> Vec<PlannedStep> {
        let mut steps = vec![PlannedStep::new(Phase::OverflowCheck, 0)];
        if !self.is_full() {
            let point = self.insertion_point(value);
            // The scan examines indices 0..point, plus the index that ends
            // it when the point is interior.
            let examined = if point < self.items.len() {
                point + 1
            } else {
                self.items.len()
            };
            for index in 0..examined {
                steps.push(PlannedStep::new(Phase::Compare { index }, 2));
            }
            steps.push(PlannedStep::new(Phase::Insert { index: point }, 4));
        }
        steps
    }

    pub fn plan_remove(&self) -> Vec<PlannedStep> {
        vec![
            PlannedStep::new(Phase::UnderflowCheck, 0),
            PlannedStep::new(Phase::Remove { index: 0 }, 1),
        ]
    }

    pub fn commit_insert(&mut self, elem: Element) -> usize {
        let index = self.insertion_point(elem.value);
        self.items.insert(index, elem);
        index
    }

    /// Remove the head; index 0 is always the next target.
    pub fn commit_remove(&mut self) -> Option<(usize, Element)> {
        if self.items.is_empty() {
            return None;
        }
        Some((0, self.items.remove(0)))
    }

    pub fn reset(&mut self) {
        self.items.clear();
    }

    /// Replace the contents with `elems` pre-sorted for the active mode.
    /// The stable sort keeps equal values in their generated order, matching
    /// what repeated single insertions would have produced.
    pub fn bulk_fill(&mut self, mut elems: Vec<Element>) {
        elems.truncate(self.capacity);
        match self.mode {
            PriorityMode::Max => elems.sort_by(|a, b| b.value.cmp(&a.value)),
            PriorityMode::Min => elems.sort_by(|a, b| a.value.cmp(&b.value)),
        }
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
