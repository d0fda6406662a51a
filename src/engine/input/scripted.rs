// Scripted input source for replays and tests

use super::InputSource;
use crate::core::Direction;
use std::collections::HashMap;

/// Reports a fixed intent per slot until told otherwise
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    intents: HashMap<usize, Direction>,
    cancel: bool,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set (or clear, with `None`) the intent for a slot
    pub fn set_intent(&mut self, player_slot: usize, intent: Option<Direction>) {
        match intent {
            Some(direction) => {
                self.intents.insert(player_slot, direction);
            }
            None => {
                self.intents.remove(&player_slot);
            }
        }
    }

    /// Builder form of `set_intent`
    pub fn with_intent(mut self, player_slot: usize, direction: Direction) -> Self {
        self.set_intent(player_slot, Some(direction));
        self
    }

    pub fn request_cancel(&mut self) {
        self.cancel = true;
    }
}

impl InputSource for ScriptedInput {
    fn poll_directional_intent(&mut self, player_slot: usize) -> Option<Direction> {
        self.intents.get(&player_slot).copied()
    }

    fn is_cancel_requested(&self) -> bool {
        self.cancel
    }
}
