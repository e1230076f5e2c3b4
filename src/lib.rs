//! frame-input (workspace facade crate).
//!
//! Re-exports the member crates as `frame_input::{types,core,normalize,term}`
//! and owns the monitor binary's configuration and session logic.

pub mod config;
pub mod monitor;

pub use frame_input_core as core;
pub use frame_input_normalize as normalize;
pub use frame_input_term as term;
pub use frame_input_types as types;

pub use config::{ConfigError, MonitorConfig};
pub use monitor::{Flow, Monitor};
