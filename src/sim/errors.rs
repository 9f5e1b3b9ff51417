//! Operation errors and command rejections
//!
//! [`SimError`] covers the only two error kinds a run can log: Overflow and
//! Underflow. Both are non-fatal. State is left untouched, the busy flag is
//! released, and auto-play is disarmed if it was armed.
//!
//! [`Rejection`] is different: it is the busy/idle gate refusing to start a
//! command at all. Rejections never reach the event log; the status bar
//! shows them and they leave no trace.

use crate::structures::StructureKind;
use std::fmt;

/// Errors raised by a structural operation's precondition phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Insertion attempted while the variant-specific fullness rule holds.
    Overflow {
        kind: StructureKind,
        occupancy: usize,
        capacity: usize,
    },

    /// Removal attempted while the structure is empty.
    Underflow { kind: StructureKind },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Overflow {
                kind: StructureKind::LinearQueue,
                occupancy,
                capacity,
            } => {
                // The linear queue can overflow with free slots behind front.
                write!(
                    f,
                    "Overflow: rear is at the last slot ({}/{} occupied, no compaction)",
                    occupancy, capacity
                )
            }
            SimError::Overflow {
                kind,
                occupancy,
                capacity,
            } => {
                write!(
                    f,
                    "Overflow: {} is full ({}/{})",
                    kind.noun(),
                    occupancy,
                    capacity
                )
            }
            SimError::Underflow { kind } => {
                write!(f, "Underflow: {} is empty", kind.noun())
            }
        }
    }
}

impl std::error::Error for SimError {}

/// A command the engine refused to start. Not an error in the logged sense.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// An operation's phase sequence is still in flight.
    Busy,
    /// Random fill is unavailable while auto-play is armed.
    AutoArmed,
    /// Priority mode only applies to the priority queue variant.
    NotPriority,
    /// Capacity must stay within the allowed bounds.
    CapacityBounds { requested: usize },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::Busy => write!(f, "busy: operation in flight"),
            Rejection::AutoArmed => write!(f, "auto-play is armed"),
            Rejection::NotPriority => write!(f, "only the priority queue has a mode"),
            Rejection::CapacityBounds { requested } => {
                write!(
                    f,
                    "capacity {} out of bounds ({}..={})",
                    requested,
                    crate::structures::MIN_CAPACITY,
                    crate::structures::MAX_CAPACITY
                )
            }
        }
    }
}
