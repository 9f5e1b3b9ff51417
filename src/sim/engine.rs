//! The structure engine
//!
//! [`Engine`] owns everything the panes display: the active structure, the
//! event log, the auto-play scheduler, the per-operation counters, and the
//! at-most-one in-flight operation. It is a pure state machine driven by
//! injected [`Instant`]s: the UI calls [`Engine::advance`] and
//! [`Engine::poll_auto`] once per frame, and tests drive it with a zero step
//! duration so every operation completes synchronously.
//!
//! An operation is a planned phase sequence (precondition check, optional
//! comparisons, mutation) executed one phase per step duration. While a
//! sequence is in flight the engine is busy and every other mutating command
//! is rejected; toggling auto-play is the only command accepted mid-flight.

use crate::structures::{
    Element, Phase, PriorityMode, Structure, StructureKind, MAX_CAPACITY, MIN_CAPACITY,
};
use rand::Rng;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

use super::errors::{Rejection, SimError};
use super::log::EventLog;
use super::ops::{InFlightOp, OpCounter, OpKind};
use super::scheduler::AutoScheduler;

/// Inclusive range for user-entered and random values.
pub const VALUE_RANGE: std::ops::RangeInclusive<i64> = 0..=99;

/// Startup configuration; every field has a sensible default.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub kind: StructureKind,
    pub capacity: usize,
    pub mode: PriorityMode,
    /// Delay between operation phases. Zero makes operations synchronous.
    pub step: Duration,
    /// Auto-play cadence.
    pub cadence: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            kind: StructureKind::Stack,
            capacity: crate::structures::DEFAULT_CAPACITY,
            mode: PriorityMode::Max,
            step: Duration::from_millis(400),
            cadence: Duration::from_millis(900),
        }
    }
}

/// What the trace pane shows: the active operation's pseudocode and the
/// line/phase currently executing (`None` once the operation settled).
#[derive(Debug, Clone, Copy)]
pub struct Trace {
    pub op: OpKind,
    pub code: &'static [&'static str],
    pub active: Option<usize>,
    pub phase: Option<Phase>,
}

#[derive(Debug)]
pub struct Engine {
    structure: Structure,
    log: EventLog,
    scheduler: AutoScheduler,
    in_flight: Option<InFlightOp>,
    next_phase_at: Option<Instant>,
    step: Duration,
    mode: PriorityMode,
    next_id: u64,
    counts: FxHashMap<OpKind, OpCounter>,
    trace: Option<Trace>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let capacity = config.capacity.clamp(MIN_CAPACITY, MAX_CAPACITY);
        let structure = Structure::new(config.kind, capacity, config.mode);
        let mut engine = Engine {
            structure,
            log: EventLog::new(),
            scheduler: AutoScheduler::new(config.cadence),
            in_flight: None,
            next_phase_at: None,
            step: config.step,
            mode: config.mode,
            next_id: 0,
            counts: FxHashMap::default(),
            trace: None,
        };
        engine.log_ready();
        engine
    }

    // --- observers ------------------------------------------------------

    pub fn structure(&self) -> &Structure {
        &self.structure
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn trace(&self) -> Option<&Trace> {
        self.trace.as_ref()
    }

    /// True while an operation's phase sequence is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn is_armed(&self) -> bool {
        self.scheduler.is_armed()
    }

    pub fn mode(&self) -> PriorityMode {
        self.mode
    }

    pub fn counter(&self, kind: OpKind) -> OpCounter {
        self.counts.get(&kind).copied().unwrap_or_default()
    }

    /// Name of the phase currently executing, for the status bar.
    pub fn active_phase(&self) -> Option<&'static str> {
        self.trace.as_ref().and_then(|t| t.phase).map(Phase::name)
    }

    // --- commands -------------------------------------------------------

    /// Begin an insertion. `requested` is the user-entered value; blank or
    /// unparsable input arrives as `None` and is coerced to a random value.
    pub fn insert(&mut self, now: Instant, requested: Option<i64>) -> Result<(), Rejection> {
        self.ensure_idle()?;
        let value = requested
            .filter(|v| VALUE_RANGE.contains(v))
            .unwrap_or_else(|| rand::thread_rng().gen_range(VALUE_RANGE));
        let steps = self.structure.plan_insert(value);
        self.trace = Some(Trace {
            op: OpKind::Insert,
            code: self.structure.insert_code(),
            active: None,
            phase: None,
        });
        self.in_flight = Some(InFlightOp::new(OpKind::Insert, Some(value), steps));
        self.schedule_first_phase(now);
        Ok(())
    }

    /// Begin a removal.
    pub fn remove(&mut self, now: Instant) -> Result<(), Rejection> {
        self.ensure_idle()?;
        self.begin_remove(now);
        Ok(())
    }

    /// Populate the buffer in one shot, bypassing per-step phases. One
    /// summary log line; unavailable while busy or while auto-play is armed.
    pub fn random_fill(&mut self) -> Result<usize, Rejection> {
        self.ensure_idle()?;
        if self.scheduler.is_armed() {
            return Err(Rejection::AutoArmed);
        }
        let capacity = self.structure.capacity();
        let mut rng = rand::thread_rng();
        let count = rng.gen_range(1..=capacity);
        let elems: Vec<Element> = (0..count)
            .map(|_| {
                let elem = Element::new(self.next_id, rng.gen_range(VALUE_RANGE));
                self.next_id += 1;
                elem
            })
            .collect();
        let start = rng.gen_range(0..capacity);
        self.structure.bulk_fill(elems, start);
        self.trace = None;
        self.log.info(format!("RANDOM-FILL -> {} elements", count));
        Ok(count)
    }

    /// Arm or disarm auto-play. Always accepted, even mid-delay; disarming
    /// never aborts the in-flight operation.
    pub fn toggle_auto(&mut self) -> bool {
        let armed = self.scheduler.toggle();
        if armed {
            self.log.info("AUTO armed");
        } else {
            self.log.info("AUTO disarmed");
        }
        armed
    }

    /// Clear the buffer and pointers (the linear queue's spent slots come
    /// back). Keeps the log: the run's history is the lesson.
    pub fn reset(&mut self) -> Result<(), Rejection> {
        self.ensure_idle()?;
        self.scheduler.disarm();
        self.structure.reset();
        self.trace = None;
        self.log
            .info(format!("RESET -> {} cleared", self.structure.kind().noun()));
        Ok(())
    }

    /// Switch variant; full reset (buffer, counters, log).
    pub fn select(&mut self, kind: StructureKind) -> Result<(), Rejection> {
        self.ensure_idle()?;
        let capacity = self.structure.capacity();
        self.full_reset(kind, capacity, self.mode);
        Ok(())
    }

    /// Resize within bounds; idle only; full reset.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), Rejection> {
        self.ensure_idle()?;
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(Rejection::CapacityBounds {
                requested: capacity,
            });
        }
        self.full_reset(self.structure.kind(), capacity, self.mode);
        Ok(())
    }

    /// Step the capacity up or down one slot.
    pub fn adjust_capacity(&mut self, delta: i32) -> Result<usize, Rejection> {
        let requested = self.structure.capacity() as i32 + delta;
        let requested = requested.max(0) as usize;
        self.set_capacity(requested)?;
        Ok(requested)
    }

    /// Flip max/min ordering; priority variant only; full reset.
    pub fn toggle_mode(&mut self) -> Result<PriorityMode, Rejection> {
        self.ensure_idle()?;
        if self.structure.kind() != StructureKind::PriorityQueue {
            return Err(Rejection::NotPriority);
        }
        self.mode = self.mode.toggled();
        let capacity = self.structure.capacity();
        self.full_reset(StructureKind::PriorityQueue, capacity, self.mode);
        Ok(self.mode)
    }

    // --- clock-driven ---------------------------------------------------

    /// Execute the next phase if its delay has elapsed.
    pub fn advance(&mut self, now: Instant) {
        let Some(due) = self.next_phase_at else {
            return;
        };
        if now < due || self.in_flight.is_none() {
            return;
        }
        self.tick();
        self.next_phase_at = if self.in_flight.is_some() {
            Some(now + self.step)
        } else {
            None
        };
    }

    /// Run every pending phase immediately (zero-delay path and tests).
    pub fn drain(&mut self) {
        while self.in_flight.is_some() {
            self.tick();
        }
        self.next_phase_at = None;
    }

    /// Give the scheduler a chance to fire. Skips while busy; on an empty
    /// structure it disarms and logs completion instead of removing.
    pub fn poll_auto(&mut self, now: Instant) {
        if self.in_flight.is_some() || !self.scheduler.is_armed() {
            return;
        }
        if self.scheduler.due(now) {
            if self.structure.is_empty() {
                self.scheduler.disarm();
                self.log.info("AUTO complete: structure empty");
            } else {
                self.begin_remove(now);
            }
        }
    }

    // --- internals ------------------------------------------------------

    fn ensure_idle(&self) -> Result<(), Rejection> {
        if self.in_flight.is_some() {
            Err(Rejection::Busy)
        } else {
            Ok(())
        }
    }

    fn begin_remove(&mut self, now: Instant) {
        let steps = self.structure.plan_remove();
        self.trace = Some(Trace {
            op: OpKind::Remove,
            code: self.structure.remove_code(),
            active: None,
            phase: None,
        });
        self.in_flight = Some(InFlightOp::new(OpKind::Remove, None, steps));
        self.schedule_first_phase(now);
    }

    fn schedule_first_phase(&mut self, now: Instant) {
        if self.step.is_zero() {
            self.drain();
        } else {
            self.next_phase_at = Some(now);
        }
    }

    /// Execute one phase. A failed precondition logs the error, drops the
    /// remaining phases, and releases the busy flag; the final phase keeps
    /// the operation in flight for one more step so its highlight is
    /// visible, then settles.
    fn tick(&mut self) {
        let Some(mut op) = self.in_flight.take() else {
            return;
        };
        let Some(step) = op.next_step() else {
            // Final delay elapsed; the operation settles.
            if let Some(trace) = self.trace.as_mut() {
                trace.active = None;
                trace.phase = None;
            }
            return;
        };
        if let Some(trace) = self.trace.as_mut() {
            trace.active = Some(step.line);
            trace.phase = Some(step.phase);
        }
        match step.phase {
            Phase::OverflowCheck => {
                if self.structure.is_full() {
                    let err = SimError::Overflow {
                        kind: self.structure.kind(),
                        occupancy: self.structure.occupancy(),
                        capacity: self.structure.capacity(),
                    };
                    self.fail(op.kind, err);
                    return;
                }
            }
            Phase::UnderflowCheck => {
                if self.structure.is_empty() {
                    let err = SimError::Underflow {
                        kind: self.structure.kind(),
                    };
                    self.fail(op.kind, err);
                    return;
                }
            }
            // Display-only: the scan is observable but mutates nothing.
            Phase::Compare { .. } => {}
            Phase::Insert { .. } => {
                let value = op.value.take().unwrap_or_default();
                let elem = Element::new(self.next_id, value);
                self.next_id += 1;
                let index = self.structure.commit_insert(elem);
                let message = self.insert_message(value, index);
                self.log.success(message);
                self.counts.entry(OpKind::Insert).or_default().accepted += 1;
            }
            Phase::Remove { .. } => {
                if let Some((index, elem)) = self.structure.commit_remove() {
                    let message = self.remove_message(elem.value, index);
                    self.log.success(message);
                    self.counts.entry(OpKind::Remove).or_default().accepted += 1;
                }
            }
        }
        self.in_flight = Some(op);
    }

    /// Error exit: state untouched, busy flag released, auto-play disarmed.
    fn fail(&mut self, kind: OpKind, err: SimError) {
        self.log.error(err.to_string());
        self.counts.entry(kind).or_default().failed += 1;
        if self.scheduler.is_armed() {
            self.scheduler.disarm();
            self.log.info("AUTO disarmed after error");
        }
    }

    fn full_reset(&mut self, kind: StructureKind, capacity: usize, mode: PriorityMode) {
        self.structure = Structure::new(kind, capacity, mode);
        self.scheduler.disarm();
        self.in_flight = None;
        self.next_phase_at = None;
        self.trace = None;
        self.counts.clear();
        self.log.clear();
        self.log_ready();
    }

    fn log_ready(&mut self) {
        let kind = self.structure.kind();
        let capacity = self.structure.capacity();
        let message = match kind {
            StructureKind::PriorityQueue => format!(
                "{} ready (capacity {}, {} mode)",
                kind.label(),
                capacity,
                self.mode.label()
            ),
            _ => format!("{} ready (capacity {})", kind.label(), capacity),
        };
        self.log.info(message);
    }

    fn insert_message(&self, value: i64, index: usize) -> String {
        match self.structure.kind() {
            StructureKind::Stack => format!("PUSH({}) -> top", value),
            StructureKind::LinearQueue | StructureKind::CircularQueue => {
                format!("ENQUEUE({}) -> slot {}", value, index)
            }
            StructureKind::PriorityQueue => format!("INSERT({}) -> index {}", value, index),
        }
    }

    fn remove_message(&self, value: i64, index: usize) -> String {
        match self.structure.kind() {
            StructureKind::Stack => format!("POP() -> {}", value),
            StructureKind::LinearQueue | StructureKind::CircularQueue => {
                format!("DEQUEUE() -> {} from slot {}", value, index)
            }
            StructureKind::PriorityQueue => format!("REMOVE() -> {} from head", value),
        }
    }
}
