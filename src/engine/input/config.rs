// Input configuration and remapping system

use super::action::{self, Action};
use std::collections::HashMap;
use winit::keyboard::KeyCode;

/// Key bindings for a single player slot
#[derive(Debug, Clone)]
pub struct InputConfig {
    player_slot: usize,

    /// Mapping from keys to actions
    bindings: HashMap<KeyCode, Action>,

    /// Reverse mapping for quick lookups (action -> all keys)
    action_to_keys: HashMap<Action, Vec<KeyCode>>,
}

impl InputConfig {
    pub fn new(player_slot: usize) -> Self {
        Self {
            player_slot,
            bindings: HashMap::new(),
            action_to_keys: HashMap::new(),
        }
    }

    /// Create a configuration from a list of bindings
    pub fn from_bindings(player_slot: usize, bindings: Vec<(KeyCode, Action)>) -> Self {
        let mut config = Self::new(player_slot);
        for (key, action) in bindings {
            config.bind(key, action);
        }
        config
    }

    pub fn player_slot(&self) -> usize {
        self.player_slot
    }

    /// Bind a key to an action, replacing whatever the key did before
    pub fn bind(&mut self, key: KeyCode, action: Action) {
        self.unbind_key(key);
        self.bindings.insert(key, action);
        self.action_to_keys.entry(action).or_default().push(key);
    }

    pub fn unbind_key(&mut self, key: KeyCode) {
        if let Some(action) = self.bindings.remove(&key) {
            if let Some(keys) = self.action_to_keys.get_mut(&action) {
                keys.retain(|k| *k != key);
                if keys.is_empty() {
                    self.action_to_keys.remove(&action);
                }
            }
        }
    }

    /// Get the action bound to a key
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.bindings.get(&key).copied()
    }

    /// Get all keys bound to an action
    pub fn get_keys(&self, action: Action) -> Vec<KeyCode> {
        self.action_to_keys.get(&action).cloned().unwrap_or_default()
    }

    pub fn clear(&mut self) {
        self.bindings.clear();
        self.action_to_keys.clear();
    }

    /// Reset to default bindings for this slot
    pub fn reset_to_defaults(&mut self) {
        self.clear();
        for (key, action) in action::default_bindings(self.player_slot) {
            self.bind(key, action);
        }
    }
}

/// Binding tables for every slot plus the global table
#[derive(Debug)]
pub struct InputConfigManager {
    configs: Vec<InputConfig>,
    global_config: InputConfig,
}

impl InputConfigManager {
    /// Create default configurations for `max_players` slots
    pub fn new(max_players: usize) -> Self {
        let configs = (0..max_players)
            .map(|slot| {
                let mut config = InputConfig::new(slot);
                config.reset_to_defaults();
                config
            })
            .collect();

        let global_config = InputConfig::from_bindings(usize::MAX, action::global_bindings());

        Self {
            configs,
            global_config,
        }
    }

    pub fn get_config(&self, player_slot: usize) -> Option<&InputConfig> {
        self.configs.get(player_slot)
    }

    pub fn get_config_mut(&mut self, player_slot: usize) -> Option<&mut InputConfig> {
        self.configs.get_mut(player_slot)
    }

    pub fn global_config(&self) -> &InputConfig {
        &self.global_config
    }

    /// Get the action for a key and slot
    /// Checks slot bindings first, then global bindings
    pub fn get_action(&self, player_slot: usize, key: KeyCode) -> Option<Action> {
        self.get_config(player_slot)
            .and_then(|config| config.get_action(key))
            .or_else(|| self.global_config.get_action(key))
    }

    pub fn num_players(&self) -> usize {
        self.configs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Direction;

    #[test]
    fn test_bind_replaces_previous_action() {
        let mut config = InputConfig::new(0);
        config.bind(KeyCode::KeyJ, Action::Move(Direction::Left));
        config.bind(KeyCode::KeyJ, Action::Move(Direction::Right));

        assert_eq!(
            config.get_action(KeyCode::KeyJ),
            Some(Action::Move(Direction::Right))
        );
        assert!(config.get_keys(Action::Move(Direction::Left)).is_empty());
    }

    #[test]
    fn test_unbind_key() {
        let mut config = InputConfig::new(0);
        config.bind(KeyCode::KeyJ, Action::Move(Direction::Left));
        config.unbind_key(KeyCode::KeyJ);
        assert_eq!(config.get_action(KeyCode::KeyJ), None);
    }

    #[test]
    fn test_defaults_per_slot() {
        let manager = InputConfigManager::new(2);
        assert_eq!(manager.num_players(), 2);
        assert_eq!(
            manager.get_action(0, KeyCode::ArrowUp),
            Some(Action::Move(Direction::Up))
        );
        assert_eq!(manager.get_action(0, KeyCode::KeyW), None);
        assert_eq!(
            manager.get_action(1, KeyCode::KeyW),
            Some(Action::Move(Direction::Up))
        );
    }

    #[test]
    fn test_global_binding_reachable_from_every_slot() {
        let manager = InputConfigManager::new(2);
        assert_eq!(manager.get_action(0, KeyCode::Escape), Some(Action::Cancel));
        assert_eq!(manager.get_action(1, KeyCode::Escape), Some(Action::Cancel));
    }

    #[test]
    fn test_remap_slot() {
        let mut manager = InputConfigManager::new(1);
        if let Some(config) = manager.get_config_mut(0) {
            config.bind(KeyCode::KeyK, Action::Move(Direction::Down));
        }
        assert_eq!(
            manager.get_action(0, KeyCode::KeyK),
            Some(Action::Move(Direction::Down))
        );

        if let Some(config) = manager.get_config_mut(0) {
            config.reset_to_defaults();
        }
        assert_eq!(manager.get_action(0, KeyCode::KeyK), None);
    }
}
