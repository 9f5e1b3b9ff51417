//! # Introduction
//!
//! structty animates the four elementary linear data structures (stack,
//! linear queue, circular queue, priority queue) slot by slot in the
//! terminal. Every operation runs as a sequence of visible phases
//! (precondition check, comparisons, mutation) with a configurable delay
//! between them, so overflow rules, pointer movement, and the priority
//! scan can be watched as they happen.
//!
//! ## Pipeline
//!
//! ```text
//! Command → Engine → phase sequence → buffer/pointers/log → TUI
//! ```
//!
//! 1. [`structures`] — the data model: dense and slotted buffers behind the
//!    [`structures::Structure`] tagged union, one operation protocol shared
//!    by all four variants.
//! 2. [`sim`] — the engine: busy-gated phase execution, the append-only
//!    [`sim::EventLog`], and the cooperative auto-play
//!    [`sim::AutoScheduler`].
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! The phase delay is a presentation concern only: with a zero step
//! duration every operation completes synchronously with identical
//! outcomes, which is how the integration tests drive the engine.

pub mod sim;
pub mod structures;
pub mod ui;
