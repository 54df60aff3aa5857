//! Action-based input mapping and edge-triggered input history.
//!
//! Applications declare logical actions (e.g. `"jump"`), bind each to one
//! or more physical inputs by human-readable name, and query at any moment
//! which actions are active and for how long.
//!
//! ## Architecture
//!
//! - [`InputMap`]: bidirectional many-to-many association between actions
//!   and raw inputs (keyboard codes, mouse button codes)
//! - [`InputHistoryTracker`]: edge-triggered, window-bounded on/off
//!   histories per key, button, and action; an action reads as active
//!   while at least one of its bound inputs is asserted
//! - [`InputSystem`]: facade that feeds winit events through the map into
//!   the tracker and decides platform-default suppression
//! - [`keys`] / [`buttons`]: static code/name lookup tables
//!
//! ## Usage example
//!
//! ```
//! use input_io::{InputMap, InputMapping, InputHistoryTracker};
//!
//! let mut map = InputMap::new();
//! map.add([InputMapping::new("jump", ["space", "w"])])?;
//! assert!(map.get_actions(["space"])?.contains("jump"));
//!
//! let mut tracker = InputHistoryTracker::new();
//! tracker.history_for_key("Space").update(true);
//! tracker.history_for_action("jump").update("Space", true);
//! assert!(tracker.action_history("jump").unwrap().current_state());
//! # Ok::<(), input_io::InputError>(())
//! ```

pub mod buttons;
pub mod keys;

mod error;
mod history;
mod map;
mod system;

pub use error::InputError;
pub use history::{ActionHistory, BinaryHistory, InputHistoryTracker, HISTORY_WINDOW};
pub use map::{InputMap, InputMapping, RawInput};
pub use system::{InputSystem, PreventDefault};
