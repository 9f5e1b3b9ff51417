//! In-flight operation state

use crate::structures::PlannedStep;
use std::collections::VecDeque;

/// The two structural mutation directions every variant shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Insert,
    Remove,
}

/// Accepted/failed tallies for one operation kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpCounter {
    pub accepted: u64,
    pub failed: u64,
}

/// An operation whose phase sequence is partway through execution.
///
/// While one of these exists the engine is busy: no other mutating command
/// may start. The plan was computed against the current buffer state, which
/// cannot change underneath it; the only mutation in flight is this one.
#[derive(Debug)]
pub struct InFlightOp {
    pub kind: OpKind,
    /// Value to insert; consumed by the `Insert` phase.
    pub value: Option<i64>,
    steps: VecDeque<PlannedStep>,
}

impl InFlightOp {
    pub fn new(kind: OpKind, value: Option<i64>, steps: Vec<PlannedStep>) -> Self {
        InFlightOp {
            kind,
            value,
            steps: steps.into(),
        }
    }

    pub fn next_step(&mut self) -> Option<PlannedStep> {
        self.steps.pop_front()
    }
}
