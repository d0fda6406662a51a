// Keyboard input source - routes winit key events to player slots

use super::action::Action;
use super::config::InputConfigManager;
use super::player::PlayerInput;
use super::InputSource;
use crate::core::Direction;
use log::{debug, info};
use winit::event::{ElementState, KeyEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// `InputSource` backed by the keyboard
#[derive(Debug)]
pub struct KeyboardInput {
    config: InputConfigManager,
    players: Vec<PlayerInput>,
    cancel_requested: bool,
    pause_toggled: bool,
}

impl KeyboardInput {
    /// Create keyboard input for `max_players` slots with default bindings
    pub fn new(max_players: usize) -> Self {
        Self {
            config: InputConfigManager::new(max_players),
            players: (0..max_players).map(PlayerInput::new).collect(),
            cancel_requested: false,
            pause_toggled: false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        if let PhysicalKey::Code(key_code) = event.physical_key {
            self.process_key(key_code, event.state == ElementState::Pressed, event.repeat);
        }
    }

    /// Apply one key transition: global keys first, then every slot the key is bound in
    pub fn process_key(&mut self, key: KeyCode, pressed: bool, repeat: bool) {
        if repeat {
            return;
        }

        match self.config.global_config().get_action(key) {
            Some(Action::Cancel) => {
                if pressed && !self.cancel_requested {
                    info!("Cancel requested");
                    self.cancel_requested = true;
                }
                return;
            }
            Some(Action::Pause) => {
                if pressed {
                    self.pause_toggled = !self.pause_toggled;
                }
                return;
            }
            _ => {}
        }

        for (slot, player) in self.players.iter_mut().enumerate() {
            if let Some(Action::Move(direction)) = self.config.get_action(slot, key) {
                if pressed {
                    player.press(direction);
                } else {
                    player.release(direction);
                }
                debug!("Slot {} intent now {:?}", slot, player.intent());
            }
        }
    }

    /// True once per pending pause key press (an even number of presses cancel out)
    pub fn take_pause_toggle(&mut self) -> bool {
        std::mem::take(&mut self.pause_toggled)
    }

    /// Release all held keys (e.g. on focus loss)
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.reset();
        }
    }

    pub fn player(&self, player_slot: usize) -> Option<&PlayerInput> {
        self.players.get(player_slot)
    }

    pub fn config(&self) -> &InputConfigManager {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut InputConfigManager {
        &mut self.config
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new(2)
    }
}

impl InputSource for KeyboardInput {
    fn poll_directional_intent(&mut self, player_slot: usize) -> Option<Direction> {
        self.players.get(player_slot).and_then(PlayerInput::intent)
    }

    fn is_cancel_requested(&self) -> bool {
        self.cancel_requested
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_creation() {
        let input = KeyboardInput::new(2);
        assert_eq!(input.num_players(), 2);
        assert!(input.player(1).is_some());
        assert!(input.player(2).is_none());
        assert!(!input.is_cancel_requested());
    }

    #[test]
    fn test_key_routes_to_its_slot_only() {
        let mut input = KeyboardInput::new(2);
        input.process_key(KeyCode::ArrowLeft, true, false);

        assert_eq!(input.poll_directional_intent(0), Some(Direction::Left));
        assert_eq!(input.poll_directional_intent(1), None);

        input.process_key(KeyCode::KeyS, true, false);
        assert_eq!(input.poll_directional_intent(1), Some(Direction::Down));
    }

    #[test]
    fn test_release_clears_intent() {
        let mut input = KeyboardInput::new(1);
        input.process_key(KeyCode::ArrowUp, true, false);
        input.process_key(KeyCode::ArrowUp, false, false);
        assert_eq!(input.poll_directional_intent(0), None);
    }

    #[test]
    fn test_repeat_events_ignored() {
        let mut input = KeyboardInput::new(1);
        input.process_key(KeyCode::ArrowUp, true, false);
        input.process_key(KeyCode::ArrowRight, true, false);
        input.process_key(KeyCode::ArrowUp, true, true);
        assert_eq!(input.poll_directional_intent(0), Some(Direction::Right));
    }

    #[test]
    fn test_unknown_slot_has_no_intent() {
        let mut input = KeyboardInput::new(1);
        assert_eq!(input.poll_directional_intent(7), None);
    }

    #[test]
    fn test_escape_requests_cancel() {
        let mut input = KeyboardInput::new(2);
        input.process_key(KeyCode::Escape, true, false);
        assert!(input.is_cancel_requested());
    }

    #[test]
    fn test_escape_without_player_slots() {
        let mut input = KeyboardInput::new(0);
        input.process_key(KeyCode::Escape, true, false);
        assert!(input.is_cancel_requested());
    }

    #[test]
    fn test_escape_release_does_not_cancel() {
        let mut input = KeyboardInput::new(2);
        input.process_key(KeyCode::Escape, false, false);
        assert!(!input.is_cancel_requested());
    }

    #[test]
    fn test_pause_toggle_is_taken_once() {
        let mut input = KeyboardInput::new(1);
        input.process_key(KeyCode::KeyP, true, false);
        input.process_key(KeyCode::KeyP, false, false);

        assert!(input.take_pause_toggle());
        assert!(!input.take_pause_toggle());

        // Two presses before the shell looks cancel out
        input.process_key(KeyCode::KeyP, true, false);
        input.process_key(KeyCode::KeyP, true, false);
        assert!(!input.take_pause_toggle());
        assert_eq!(input.poll_directional_intent(0), None);
    }

    #[test]
    fn test_reset_all() {
        let mut input = KeyboardInput::new(2);
        input.process_key(KeyCode::ArrowDown, true, false);
        input.process_key(KeyCode::KeyD, true, false);
        input.reset_all();
        assert_eq!(input.poll_directional_intent(0), None);
        assert_eq!(input.poll_directional_intent(1), None);
    }
}
