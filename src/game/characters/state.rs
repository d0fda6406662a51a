// Character activity: idle or walking, in one of four directions

use crate::core::Direction;

/// Discrete animation state; selects which frame sequence is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Activity {
    IdleUp,
    IdleDown,
    IdleLeft,
    IdleRight,
    WalkUp,
    WalkDown,
    WalkLeft,
    WalkRight,
}

impl Default for Activity {
    fn default() -> Self {
        Self::IdleDown
    }
}

impl Activity {
    /// Every activity, idle first then walking, each in up/down/left/right order
    pub const ALL: [Activity; 8] = [
        Activity::IdleUp,
        Activity::IdleDown,
        Activity::IdleLeft,
        Activity::IdleRight,
        Activity::WalkUp,
        Activity::WalkDown,
        Activity::WalkLeft,
        Activity::WalkRight,
    ];

    pub fn idle(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::IdleUp,
            Direction::Down => Self::IdleDown,
            Direction::Left => Self::IdleLeft,
            Direction::Right => Self::IdleRight,
        }
    }

    pub fn walking(direction: Direction) -> Self {
        match direction {
            Direction::Up => Self::WalkUp,
            Direction::Down => Self::WalkDown,
            Direction::Left => Self::WalkLeft,
            Direction::Right => Self::WalkRight,
        }
    }

    /// Direction the character faces in this activity
    pub fn facing(&self) -> Direction {
        match self {
            Self::IdleUp | Self::WalkUp => Direction::Up,
            Self::IdleDown | Self::WalkDown => Direction::Down,
            Self::IdleLeft | Self::WalkLeft => Direction::Left,
            Self::IdleRight | Self::WalkRight => Direction::Right,
        }
    }

    pub fn is_walking(&self) -> bool {
        matches!(
            self,
            Self::WalkUp | Self::WalkDown | Self::WalkLeft | Self::WalkRight
        )
    }

    /// Animation name, for logs
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::IdleUp => "idle_up",
            Self::IdleDown => "idle_down",
            Self::IdleLeft => "idle_left",
            Self::IdleRight => "idle_right",
            Self::WalkUp => "walk_up",
            Self::WalkDown => "walk_down",
            Self::WalkLeft => "walk_left",
            Self::WalkRight => "walk_right",
        }
    }
}
