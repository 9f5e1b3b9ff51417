//! The four simulated structure variants
//!
//! This module is the data model the rest of the crate animates:
//! - [`element::Element`]: what the buffers store
//! - [`stack::Stack`] and [`priority_queue::PriorityQueue`]: dense buffers
//!   (compact, no internal gaps)
//! - [`linear_queue::LinearQueue`] and [`circular_queue::CircularQueue`]:
//!   slotted buffers (fixed-length, pointer-tracked occupancy)
//! - [`Structure`]: the closed tagged union dispatching the shared operation
//!   protocol, so the engine, scheduler, and log plumbing are single-sourced
//!
//! Variants are pure state. They plan an operation as a list of
//! [`PlannedStep`]s (precondition check, comparisons, mutation) and expose
//! separate `commit_*` mutators; the engine in [`crate::sim`] walks the plan
//! one phase at a time and only then commits, which is what makes the
//! animation pacing a presentation concern rather than a correctness one.

pub mod circular_queue;
pub mod element;
pub mod linear_queue;
pub mod priority_queue;
pub mod stack;

pub use circular_queue::CircularQueue;
pub use element::{ColorTag, Element};
pub use linear_queue::LinearQueue;
pub use priority_queue::PriorityQueue;
pub use stack::Stack;

/// Capacity bounds shared by every variant.
pub const MIN_CAPACITY: usize = 4;
pub const MAX_CAPACITY: usize = 16;
pub const DEFAULT_CAPACITY: usize = 8;

/// One simulated processing phase of an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Insertion precondition: is the structure full?
    OverflowCheck,
    /// Removal precondition: is the structure empty?
    UnderflowCheck,
    /// Priority-scan comparison against the element at `index`.
    Compare { index: usize },
    /// Place the new element at `index`.
    Insert { index: usize },
    /// Take the element out of `index`.
    Remove { index: usize },
}

impl Phase {
    /// Name shown by the status bar while the phase is active.
    pub fn name(self) -> &'static str {
        match self {
            Phase::OverflowCheck => "overflow-check",
            Phase::UnderflowCheck => "underflow-check",
            Phase::Compare { .. } => "compare",
            Phase::Insert { .. } => "insert",
            Phase::Remove { .. } => "remove",
        }
    }
}

/// A phase plus the pseudocode line it corresponds to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedStep {
    pub phase: Phase,
    pub line: usize,
}

impl PlannedStep {
    pub fn new(phase: Phase, line: usize) -> Self {
        PlannedStep { phase, line }
    }
}

/// Ordering discipline for the priority queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriorityMode {
    #[default]
    Max,
    Min,
}

impl PriorityMode {
    pub fn label(self) -> &'static str {
        match self {
            PriorityMode::Max => "max",
            PriorityMode::Min => "min",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            PriorityMode::Max => PriorityMode::Min,
            PriorityMode::Min => PriorityMode::Max,
        }
    }
}

/// Which variant is being visualized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StructureKind {
    Stack,
    LinearQueue,
    CircularQueue,
    PriorityQueue,
}

impl StructureKind {
    pub const ALL: [StructureKind; 4] = [
        StructureKind::Stack,
        StructureKind::LinearQueue,
        StructureKind::CircularQueue,
        StructureKind::PriorityQueue,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StructureKind::Stack => "Stack",
            StructureKind::LinearQueue => "Linear Queue",
            StructureKind::CircularQueue => "Circular Queue",
            StructureKind::PriorityQueue => "Priority Queue",
        }
    }

    /// Lowercase noun used inside log messages.
    pub fn noun(self) -> &'static str {
        match self {
            StructureKind::Stack => "stack",
            StructureKind::LinearQueue => "linear queue",
            StructureKind::CircularQueue => "circular queue",
            StructureKind::PriorityQueue => "priority queue",
        }
    }

    /// Verb pair shown in logs and pane titles.
    pub fn verbs(self) -> (&'static str, &'static str) {
        match self {
            StructureKind::Stack => ("PUSH", "POP"),
            StructureKind::LinearQueue | StructureKind::CircularQueue => ("ENQUEUE", "DEQUEUE"),
            StructureKind::PriorityQueue => ("INSERT", "REMOVE"),
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "stack" => Some(StructureKind::Stack),
            "linear" => Some(StructureKind::LinearQueue),
            "circular" => Some(StructureKind::CircularQueue),
            "priority" => Some(StructureKind::PriorityQueue),
            _ => None,
        }
    }
}

/// How one buffer slot should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotView<'a> {
    Occupied(&'a Element),
    /// Never used, or vacated and reusable.
    Empty,
    /// Linear queue only: vacated and permanently unusable until reset.
    Spent,
}

/// The closed set of variants behind one operation protocol.
#[derive(Debug, Clone)]
pub enum Structure {
    Stack(Stack),
    LinearQueue(LinearQueue),
    CircularQueue(CircularQueue),
    PriorityQueue(PriorityQueue),
}

impl Structure {
    pub fn new(kind: StructureKind, capacity: usize, mode: PriorityMode) -> Self {
        match kind {
            StructureKind::Stack => Structure::Stack(Stack::new(capacity)),
            StructureKind::LinearQueue => Structure::LinearQueue(LinearQueue::new(capacity)),
            StructureKind::CircularQueue => Structure::CircularQueue(CircularQueue::new(capacity)),
            StructureKind::PriorityQueue => {
                Structure::PriorityQueue(PriorityQueue::new(capacity, mode))
            }
        }
    }

    pub fn kind(&self) -> StructureKind {
        match self {
            Structure::Stack(_) => StructureKind::Stack,
            Structure::LinearQueue(_) => StructureKind::LinearQueue,
            Structure::CircularQueue(_) => StructureKind::CircularQueue,
            Structure::PriorityQueue(_) => StructureKind::PriorityQueue,
        }
    }

    pub fn capacity(&self) -> usize {
        match self {
            Structure::Stack(s) => s.capacity(),
            Structure::LinearQueue(q) => q.capacity(),
            Structure::CircularQueue(q) => q.capacity(),
            Structure::PriorityQueue(q) => q.capacity(),
        }
    }

    pub fn occupancy(&self) -> usize {
        match self {
            Structure::Stack(s) => s.len(),
            Structure::LinearQueue(q) => q.occupancy(),
            Structure::CircularQueue(q) => q.occupancy(),
            Structure::PriorityQueue(q) => q.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Structure::Stack(s) => s.is_empty(),
            Structure::LinearQueue(q) => q.is_empty(),
            Structure::CircularQueue(q) => q.is_empty(),
            Structure::PriorityQueue(q) => q.is_empty(),
        }
    }

    pub fn is_full(&self) -> bool {
        match self {
            Structure::Stack(s) => s.is_full(),
            Structure::LinearQueue(q) => q.is_full(),
            Structure::CircularQueue(q) => q.is_full(),
            Structure::PriorityQueue(q) => q.is_full(),
        }
    }

    /// `(front, rear)` for the two queue variants, `None` otherwise.
    pub fn pointers(&self) -> Option<(i32, i32)> {
        match self {
            Structure::LinearQueue(q) => Some(q.pointers()),
            Structure::CircularQueue(q) => Some(q.pointers()),
            _ => None,
        }
    }

    pub fn plan_insert(&self, value: i64) -> Vec<PlannedStep> {
        match self {
            Structure::Stack(s) => s.plan_push(),
            Structure::LinearQueue(q) => q.plan_enqueue(),
            Structure::CircularQueue(q) => q.plan_enqueue(),
            Structure::PriorityQueue(q) => q.plan_insert(value),
        }
    }

    pub fn plan_remove(&self) -> Vec<PlannedStep> {
        match self {
            Structure::Stack(s) => s.plan_pop(),
            Structure::LinearQueue(q) => q.plan_dequeue(),
            Structure::CircularQueue(q) => q.plan_dequeue(),
            Structure::PriorityQueue(q) => q.plan_remove(),
        }
    }

    /// Place `elem`, returning the index it landed in. The caller has
    /// already run the overflow-check phase.
    pub fn commit_insert(&mut self, elem: Element) -> usize {
        match self {
            Structure::Stack(s) => s.commit_push(elem),
            Structure::LinearQueue(q) => q.commit_enqueue(elem),
            Structure::CircularQueue(q) => q.commit_enqueue(elem),
            Structure::PriorityQueue(q) => q.commit_insert(elem),
        }
    }

    /// Take the removal candidate out, returning its index and the element.
    pub fn commit_remove(&mut self) -> Option<(usize, Element)> {
        match self {
            Structure::Stack(s) => s.commit_pop(),
            Structure::LinearQueue(q) => q.commit_dequeue(),
            Structure::CircularQueue(q) => q.commit_dequeue(),
            Structure::PriorityQueue(q) => q.commit_remove(),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Structure::Stack(s) => s.reset(),
            Structure::LinearQueue(q) => q.reset(),
            Structure::CircularQueue(q) => q.reset(),
            Structure::PriorityQueue(q) => q.reset(),
        }
    }

    /// Bulk placement for random fill. `start` is the wrap offset and only
    /// meaningful for the circular queue; the other variants fill from 0.
    pub fn bulk_fill(&mut self, elems: Vec<Element>, start: usize) {
        match self {
            Structure::Stack(s) => s.bulk_fill(elems),
            Structure::LinearQueue(q) => q.bulk_fill(elems),
            Structure::CircularQueue(q) => q.bulk_fill(elems, start),
            Structure::PriorityQueue(q) => q.bulk_fill(elems),
        }
    }

    /// Pseudocode for this variant's insertion operation.
    pub fn insert_code(&self) -> &'static [&'static str] {
        match self {
            Structure::Stack(_) => &stack::PUSH_CODE,
            Structure::LinearQueue(_) => &linear_queue::ENQUEUE_CODE,
            Structure::CircularQueue(_) => &circular_queue::ENQUEUE_CODE,
            Structure::PriorityQueue(q) => q.insert_code(),
        }
    }

    /// Pseudocode for this variant's removal operation.
    pub fn remove_code(&self) -> &'static [&'static str] {
        match self {
            Structure::Stack(_) => &stack::POP_CODE,
            Structure::LinearQueue(_) => &linear_queue::DEQUEUE_CODE,
            Structure::CircularQueue(_) => &circular_queue::DEQUEUE_CODE,
            Structure::PriorityQueue(_) => &priority_queue::REMOVE_CODE,
        }
    }

    /// One entry per slot, in buffer order (for the buffer pane).
    pub fn slot_views(&self) -> Vec<SlotView<'_>> {
        match self {
            Structure::Stack(s) => s.slot_views(),
            Structure::LinearQueue(q) => q.slot_views(),
            Structure::CircularQueue(q) => q.slot_views(),
            Structure::PriorityQueue(q) => q.slot_views(),
        }
    }
}
