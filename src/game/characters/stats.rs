// Body stats - size of the hitbox and walking speed

/// Kinematic properties of a character body
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyStats {
    /// Walking speed (pixels/second); applied along one axis at a time
    pub max_speed: f32,
    /// Hitbox width in pixels
    pub width: f32,
    /// Hitbox height in pixels
    pub height: f32,
}

/// Stats shared by the stock characters: one 32x32 sprite cell, 100 px/s
pub const BASE_STATS: BodyStats = BodyStats {
    max_speed: 100.0,
    width: 32.0,
    height: 32.0,
};

impl Default for BodyStats {
    fn default() -> Self {
        BASE_STATS
    }
}

impl BodyStats {
    pub fn new(max_speed: f32, width: f32, height: f32) -> Self {
        Self {
            max_speed,
            width,
            height,
        }
    }

    /// Same stats with a different speed
    pub fn with_speed(mut self, max_speed: f32) -> Self {
        self.max_speed = max_speed;
        self
    }
}
