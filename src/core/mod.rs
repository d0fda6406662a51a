// Core geometry shared by the world and the characters

pub mod direction;
pub mod math;

pub use direction::Direction;
pub use math::Rect;
