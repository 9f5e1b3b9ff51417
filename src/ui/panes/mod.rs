//! TUI pane rendering modules
//!
//! This module provides the rendering logic for all visual panes in the TUI,
//! organized by responsibility.
//!
//! # Pane Modules
//!
//! - [`buffer`]: Slot-by-slot view of the active structure with pointer
//!   markers and spent-slot shading
//! - [`trace`]: Pseudocode of the running operation with the executing
//!   phase's line highlighted
//! - [`log`]: Timestamped, severity-colored event log with smart auto-scroll
//! - [`status`]: Status bar with keybindings and engine state indicators
//!
//! Each pane module exports a primary `render_*` function plus any
//! associated scroll/render-data types.

pub mod buffer;
pub mod log;
pub mod status;
pub mod trace;

// Re-export render functions for convenience
pub use buffer::render_buffer_pane;
pub use log::{render_log_pane, LogScrollState};
pub use status::{render_status_bar, StatusRenderData};
pub use trace::render_trace_pane;
