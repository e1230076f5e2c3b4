//! Terminal event normalizer (host-facing).
//!
//! This crate is the reference producer of normalized input records for the
//! state engine. It maps `crossterm` events into
//! [`InputEvent`](crate::types::InputEvent)s and supplies the terminal's
//! implementations of the engine's collaborator traits:
//!
//! - [`Normalizer`]: key, mouse, and paste events to input records
//! - [`map`]: terminal key codes to virtual key codes
//! - [`scan`]: virtual key codes to synthesized scan codes
//! - [`TerminalCursor`]: a [`CursorBackend`](crate::core::CursorBackend) over escape sequences
//! - [`TerminalDevices`]: a [`DeviceSource`](crate::core::DeviceSource) for the terminal's devices

pub mod cursor;
pub mod devices;
pub mod map;
pub mod normalizer;
pub mod scan;

pub use frame_input_core as core;
pub use frame_input_types as types;

pub use cursor::TerminalCursor;
pub use devices::TerminalDevices;
pub use map::{should_quit, virtual_key};
pub use normalizer::{Normalized, Normalizer, Releases};
pub use scan::scan_code;
