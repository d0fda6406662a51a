// Input handling system
//
// Turns raw keyboard state into one directional intent per player slot.
//
// ## Architecture
//
// - `action`: actions (move in a direction, cancel) and default key bindings
// - `config`: per-slot binding tables and remapping
// - `player`: held-direction tracking for one slot
// - `manager`: `KeyboardInput`, the winit-driven `InputSource`
// - `scripted`: `ScriptedInput`, a fixed-intent `InputSource` for replays and tests
//
// ## Usage Example
//
// ```rust,ignore
// let mut input = KeyboardInput::new(2);
//
// // In the event loop, feed keyboard events
// input.process_keyboard_event(&key_event);
//
// // Once per tick, the world polls each slot
// let intent = input.poll_directional_intent(0); // Option<Direction>
// ```

pub mod action;
pub mod config;
pub mod manager;
pub mod player;
pub mod scripted;

pub use action::Action;
pub use config::{InputConfig, InputConfigManager};
pub use manager::KeyboardInput;
pub use player::PlayerInput;
pub use scripted::ScriptedInput;

use crate::core::Direction;

/// Source of per-player movement intents, polled once per tick
pub trait InputSource {
    /// Direction the player in `player_slot` wants to move, or `None` to stand still
    fn poll_directional_intent(&mut self, player_slot: usize) -> Option<Direction>;

    /// Whether the user asked to quit
    fn is_cancel_requested(&self) -> bool;
}
