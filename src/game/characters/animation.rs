// Character animation: frame tables, the frame clock, and sprite-sheet clipping

use std::ops::RangeInclusive;

use crate::engine::assets::TextureHandle;
use crate::engine::renderer::SourceClip;

use super::state::Activity;

/// Accumulated time after which the animation cycle advances, in seconds
pub const FRAME_ADVANCE_THRESHOLD: f32 = 0.24;

/// Frame tables that cannot drive a character
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAnimationConfig {
    #[error("frame sequence for {0:?} is empty")]
    EmptySequence(Activity),

    #[error("frame {frame} of {activity:?} is out of range (sheet has {available} frames)")]
    FrameOutOfRange {
        activity: Activity,
        frame: usize,
        available: usize,
    },
}

/// One frame sequence per direction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DirectionalFrames {
    pub up: Vec<usize>,
    pub down: Vec<usize>,
    pub left: Vec<usize>,
    pub right: Vec<usize>,
}

impl DirectionalFrames {
    pub fn new(up: Vec<usize>, down: Vec<usize>, left: Vec<usize>, right: Vec<usize>) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }
}

/// The eight frame sequences of a character, one per `Activity`
///
/// Every sequence is non-empty; this is checked once in `new`, so lookups
/// during a tick never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameTables {
    idle: DirectionalFrames,
    walk: DirectionalFrames,
}

impl FrameTables {
    /// Build frame tables, rejecting any empty sequence
    pub fn new(
        idle: DirectionalFrames,
        walk: DirectionalFrames,
    ) -> Result<Self, InvalidAnimationConfig> {
        let tables = Self { idle, walk };
        for activity in Activity::ALL {
            if tables.sequence(activity).is_empty() {
                return Err(InvalidAnimationConfig::EmptySequence(activity));
            }
        }
        Ok(tables)
    }

    /// The classic 12-frame character sheet layout (3 columns x 4 rows:
    /// down, left, right, up; middle column is the standing pose)
    pub fn standard() -> Self {
        Self {
            idle: DirectionalFrames::new(vec![10], vec![1], vec![4], vec![7]),
            walk: DirectionalFrames::new(vec![9, 11], vec![0, 2], vec![3, 5], vec![6, 8]),
        }
    }

    /// Frame sequence for an activity
    pub fn sequence(&self, activity: Activity) -> &[usize] {
        match activity {
            Activity::IdleUp => &self.idle.up,
            Activity::IdleDown => &self.idle.down,
            Activity::IdleLeft => &self.idle.left,
            Activity::IdleRight => &self.idle.right,
            Activity::WalkUp => &self.walk.up,
            Activity::WalkDown => &self.walk.down,
            Activity::WalkLeft => &self.walk.left,
            Activity::WalkRight => &self.walk.right,
        }
    }

    /// Check that every referenced frame exists in a sheet of `frame_count` frames
    pub fn validate_against(&self, frame_count: usize) -> Result<(), InvalidAnimationConfig> {
        for activity in Activity::ALL {
            if let Some(&frame) = self
                .sequence(activity)
                .iter()
                .find(|&&frame| frame >= frame_count)
            {
                return Err(InvalidAnimationConfig::FrameOutOfRange {
                    activity,
                    frame,
                    available: frame_count,
                });
            }
        }
        Ok(())
    }
}

/// Per-body animation timer
///
/// `age` accumulates tick deltas; once it exceeds the threshold the cycle
/// counter advances and `age` restarts from zero (any excess is dropped).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationClock {
    age: f32,
    cycle: u64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `delta` seconds; returns true if the cycle advanced
    pub fn advance(&mut self, delta: f32) -> bool {
        self.age += delta;
        if self.age > FRAME_ADVANCE_THRESHOLD {
            self.cycle += 1;
            self.age = 0.0;
            true
        } else {
            false
        }
    }

    pub fn age(&self) -> f32 {
        self.age
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Frame shown for `sequence` at the current cycle
    ///
    /// `sequence` must be non-empty; `FrameTables` guarantees that.
    pub fn frame_in(&self, sequence: &[usize]) -> usize {
        sequence[(self.cycle % sequence.len() as u64) as usize]
    }
}

/// Frame rectangles of one character inside a sprite-sheet texture
#[derive(Debug, Clone)]
pub struct CharacterSheet {
    texture: TextureHandle,
    frame_width: u32,
    frame_height: u32,
    /// Top-left texel of each frame, indexed by frame number
    frames: Vec<(u32, u32)>,
}

impl CharacterSheet {
    pub fn new(texture: TextureHandle, frame_width: u32, frame_height: u32) -> Self {
        Self {
            texture,
            frame_width,
            frame_height,
            frames: Vec::new(),
        }
    }

    /// Append a frame whose top-left corner is at `(x, y)`; returns its index
    pub fn add_frame(&mut self, x: u32, y: u32) -> usize {
        self.frames.push((x, y));
        self.frames.len() - 1
    }

    /// Append a block of grid cells, row by row
    pub fn add_frame_block(&mut self, columns: RangeInclusive<u32>, rows: RangeInclusive<u32>) {
        for row in rows {
            for col in columns.clone() {
                self.add_frame(col * self.frame_width, row * self.frame_height);
            }
        }
    }

    /// Builder form of `add_frame_block`
    pub fn with_frame_block(mut self, columns: RangeInclusive<u32>, rows: RangeInclusive<u32>) -> Self {
        self.add_frame_block(columns, rows);
        self
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame_size(&self) -> (u32, u32) {
        (self.frame_width, self.frame_height)
    }

    /// Source rectangle of a frame
    pub fn clip(&self, frame: usize) -> Option<SourceClip> {
        self.frames
            .get(frame)
            .map(|&(x, y)| SourceClip::new(x, y, self.frame_width, self.frame_height))
    }
}
