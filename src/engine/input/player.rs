// Per-slot held-direction state

use crate::core::Direction;

/// Directions currently held by one player, in press order
///
/// The intent is the most recently pressed direction that is still held,
/// so tapping Left while holding Up turns left and releasing Left resumes Up.
#[derive(Debug, Clone, Default)]
pub struct PlayerInput {
    player_slot: usize,
    held: Vec<Direction>,
}

impl PlayerInput {
    pub fn new(player_slot: usize) -> Self {
        Self {
            player_slot,
            held: Vec::with_capacity(4),
        }
    }

    pub fn player_slot(&self) -> usize {
        self.player_slot
    }

    pub fn is_pressed(&self, direction: Direction) -> bool {
        self.held.contains(&direction)
    }

    /// Register a press; repeats of a held key are ignored
    pub fn press(&mut self, direction: Direction) {
        if !self.held.contains(&direction) {
            self.held.push(direction);
        }
    }

    pub fn release(&mut self, direction: Direction) {
        self.held.retain(|d| *d != direction);
    }

    /// Current directional intent
    pub fn intent(&self) -> Option<Direction> {
        self.held.last().copied()
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn reset(&mut self) {
        self.held.clear();
    }
}
