//! Input state engine - pure, deterministic, and testable
//!
//! This crate turns a stream of normalized input records into per-frame state
//! that client code polls. It has **no dependencies** on any windowing system,
//! terminal, or platform API, making it:
//!
//! - **Deterministic**: the same events and commits always produce the same state
//! - **Testable**: every rule is exercised without a real device
//! - **Portable**: any host that can produce [`InputEvent`](types::InputEvent)s can drive it
//! - **Fast**: commit does not allocate once the pending queues have warmed up
//!
//! # Module Structure
//!
//! - [`context`]: [`InputContext`], the single owner of all engine state
//! - [`table`]: double-buffered boolean tables with edge queries
//! - [`state`]: the key, scan code, and mouse button tables
//! - [`pending`]: per-tick transition queues
//! - [`deltas`]: motion and wheel accumulators (and the wheel notch policy)
//! - [`text`]: raw and composed text buffers
//! - [`dispatch`]: ordered callback lists
//! - [`cursor`]: cursor policy delegated to a [`CursorBackend`]
//! - [`device`]: device enumeration delegated to a [`DeviceSource`]
//!
//! # Tick model
//!
//! Events are recorded as they arrive. Once per tick the host calls
//! [`InputContext::commit`], which snapshots current state into previous state,
//! replays pending transitions in order, fires callbacks, and clears the
//! queues. Between commits every query returns the same answer.
//!
//! # Example
//!
//! ```
//! use frame_input_core::InputContext;
//! use frame_input_core::types::{KeyCode, Motion};
//!
//! let mut input = InputContext::new();
//!
//! input.record_key_transition(KeyCode::SPACE.raw() as u16, true);
//! input.record_motion(3, -2);
//! input.record_motion(1, 1);
//! input.commit();
//!
//! assert!(input.is_key_down(KeyCode::SPACE));
//! assert!(input.key_went_down(KeyCode::SPACE));
//! assert_eq!(input.consume_motion(), Motion::new(4, -1));
//!
//! // Held, but no longer a fresh edge.
//! input.commit();
//! assert!(input.is_key_down(KeyCode::SPACE));
//! assert!(!input.key_went_down(KeyCode::SPACE));
//! ```

pub mod config;
pub mod context;
pub mod cursor;
pub mod deltas;
pub mod device;
pub mod dispatch;
pub mod error;
pub mod pending;
pub mod state;
pub mod table;
pub mod text;

pub use frame_input_types as types;

// Re-export commonly used types for convenience
pub use config::EngineConfig;
pub use context::InputContext;
pub use cursor::{CursorBackend, CursorPolicy};
pub use device::{enumerate_devices, DeviceSource, StaticDevices};
pub use dispatch::{Category, SubscriberId};
pub use error::{CursorError, DeviceError};
pub use pending::Transition;
pub use state::InputState;
