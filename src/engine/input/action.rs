// Input action definitions and default key bindings

use winit::keyboard::KeyCode;

use crate::core::Direction;

/// Everything a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Move(Direction),
    Cancel,
    /// Freeze or unfreeze the clock
    Pause,
}

/// Default bindings for a player slot: arrows for slot 0, WASD for slot 1
pub fn default_bindings(player_slot: usize) -> Vec<(KeyCode, Action)> {
    match player_slot {
        0 => vec![
            (KeyCode::ArrowUp, Action::Move(Direction::Up)),
            (KeyCode::ArrowDown, Action::Move(Direction::Down)),
            (KeyCode::ArrowLeft, Action::Move(Direction::Left)),
            (KeyCode::ArrowRight, Action::Move(Direction::Right)),
        ],
        1 => vec![
            (KeyCode::KeyW, Action::Move(Direction::Up)),
            (KeyCode::KeyS, Action::Move(Direction::Down)),
            (KeyCode::KeyA, Action::Move(Direction::Left)),
            (KeyCode::KeyD, Action::Move(Direction::Right)),
        ],
        _ => Vec::new(),
    }
}

/// Global bindings (not player-specific)
pub fn global_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        (KeyCode::Escape, Action::Cancel),
        (KeyCode::KeyP, Action::Pause),
    ]
}
