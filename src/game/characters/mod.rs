// Character system
//
// - `state`: the eight idle/walk activities
// - `animation`: frame tables, the animation clock, sprite-sheet clips
// - `body`: movement and animation state machine of one character
// - `stats`: hitbox size and speed
// - `character`: named characters and the roster that owns them

pub mod animation;
pub mod body;
pub mod character;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use animation::{
    AnimationClock, CharacterSheet, DirectionalFrames, FrameTables, InvalidAnimationConfig,
    FRAME_ADVANCE_THRESHOLD,
};
pub use body::{AnimatedBody, CollisionQuery, MoveOutcome};
pub use character::{Character, CharacterId, CharacterRoster};
pub use state::Activity;
pub use stats::{BodyStats, BASE_STATS};
