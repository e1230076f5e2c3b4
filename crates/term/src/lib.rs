//! Terminal front end for the input monitor.
//!
//! `view` turns engine state into plain text lines and has no I/O.
//! `renderer` owns the terminal modes the monitor needs (raw mode, mouse
//! capture, focus and paste reporting, key release reporting where the
//! terminal supports it) and redraws only the lines that changed.

pub mod renderer;
pub mod view;

pub use frame_input_core as core;
pub use frame_input_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use view::{MonitorStatus, MonitorView, EVENT_LOG_LINES};
