// Animated body: position, velocity, activity and animation clock of one character

use glam::Vec2;
use log::trace;

use crate::core::{Direction, Rect};

use super::animation::{AnimationClock, FrameTables};
use super::state::Activity;
use super::stats::BodyStats;

/// Answers "would a box here overlap something solid?"
pub trait CollisionQuery {
    fn is_blocked(&self, rect: &Rect) -> bool;
}

impl<F> CollisionQuery for F
where
    F: Fn(&Rect) -> bool,
{
    fn is_blocked(&self, rect: &Rect) -> bool {
        self(rect)
    }
}

/// What happened to the body's position during one `advance`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The candidate position was free and was taken
    Moved,
    /// The candidate position was blocked; nothing moved
    Blocked,
    /// Velocity was zero
    Stationary,
}

/// Kinematic and animation state of one character
///
/// Moves along one axis at a time at `max_speed`. A move into a blocked
/// area is dropped whole: no sliding, no partial step. The animation clock
/// runs every tick whether or not the body moved.
#[derive(Debug, Clone)]
pub struct AnimatedBody {
    /// Top-left corner of the hitbox, in pixels
    position: Vec2,
    /// Pixels per second; at most one axis is non-zero
    velocity: Vec2,
    /// Hitbox size in pixels
    size: Vec2,
    max_speed: f32,

    activity: Activity,
    frames: FrameTables,
    clock: AnimationClock,
    /// Sheet frame currently displayed
    current_frame: usize,
}

impl AnimatedBody {
    /// Create a body standing still and facing down at `position`
    pub fn new(position: Vec2, stats: BodyStats, frames: FrameTables) -> Self {
        let activity = Activity::default();
        let clock = AnimationClock::new();
        let current_frame = clock.frame_in(frames.sequence(activity));

        Self {
            position,
            velocity: Vec2::ZERO,
            size: Vec2::new(stats.width, stats.height),
            max_speed: stats.max_speed,
            activity,
            frames,
            clock,
            current_frame,
        }
    }

    /// Start walking in `direction` at full speed
    pub fn intent_move(&mut self, direction: Direction) {
        self.velocity = direction.unit() * self.max_speed;
        self.activity = Activity::walking(direction);
    }

    /// Stop, turning to the idle pose of the direction last moved in
    ///
    /// Horizontal motion is checked before vertical. With zero velocity the
    /// activity is left alone, so calling this repeatedly is harmless.
    pub fn intent_stop(&mut self) {
        let idle = if self.velocity.x > 0.0 {
            Some(Activity::IdleRight)
        } else if self.velocity.x < 0.0 {
            Some(Activity::IdleLeft)
        } else if self.velocity.y > 0.0 {
            Some(Activity::IdleDown)
        } else if self.velocity.y < 0.0 {
            Some(Activity::IdleUp)
        } else {
            None
        };

        if let Some(activity) = idle {
            self.activity = activity;
        }
        self.velocity = Vec2::ZERO;
    }

    /// Advance physics and animation by `delta` seconds
    pub fn advance<Q>(&mut self, delta: f32, collision: &Q) -> MoveOutcome
    where
        Q: CollisionQuery + ?Sized,
    {
        let outcome = if self.velocity != Vec2::ZERO {
            let candidate = self.position + self.velocity * delta;
            if collision.is_blocked(&Rect::from_position_size(candidate, self.size)) {
                trace!("Move to {:?} blocked", candidate);
                MoveOutcome::Blocked
            } else {
                self.position = candidate;
                MoveOutcome::Moved
            }
        } else {
            self.intent_stop();
            MoveOutcome::Stationary
        };

        self.clock.advance(delta);
        self.current_frame = self.clock.frame_in(self.frames.sequence(self.activity));

        outcome
    }

    /// Teleport, keeping velocity and activity
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn max_speed(&self) -> f32 {
        self.max_speed
    }

    /// Current hitbox
    pub fn hitbox(&self) -> Rect {
        Rect::from_position_size(self.position, self.size)
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn facing(&self) -> Direction {
        self.activity.facing()
    }

    pub fn is_moving(&self) -> bool {
        self.velocity != Vec2::ZERO
    }

    /// Frame sequence of the current activity
    pub fn active_sequence(&self) -> &[usize] {
        self.frames.sequence(self.activity)
    }

    /// Sheet frame to display
    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn animation_cycle(&self) -> u64 {
        self.clock.cycle()
    }

    pub fn animation_age(&self) -> f32 {
        self.clock.age()
    }

    pub fn frames(&self) -> &FrameTables {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::characters::animation::DirectionalFrames;
    use approx::assert_relative_eq;

    fn free(_: &Rect) -> bool {
        false
    }

    fn solid(_: &Rect) -> bool {
        true
    }

    fn body_at(x: f32, y: f32) -> AnimatedBody {
        AnimatedBody::new(Vec2::new(x, y), BodyStats::default(), FrameTables::standard())
    }

    #[test]
    fn test_new_body_is_idle_down() {
        let body = body_at(100.0, 100.0);
        assert_eq!(body.activity(), Activity::IdleDown);
        assert_eq!(body.velocity(), Vec2::ZERO);
        assert_eq!(body.current_frame(), 1);
        assert_eq!(body.hitbox(), Rect::new(100.0, 100.0, 32.0, 32.0));
    }

    #[test]
    fn test_intent_move_sets_single_axis_velocity() {
        let mut body = body_at(0.0, 0.0);

        body.intent_move(Direction::Right);
        assert_eq!(body.velocity(), Vec2::new(100.0, 0.0));
        assert_eq!(body.activity(), Activity::WalkRight);

        body.intent_move(Direction::Up);
        assert_eq!(body.velocity(), Vec2::new(0.0, -100.0));
        assert_eq!(body.activity(), Activity::WalkUp);
    }

    #[test]
    fn test_stop_after_moving_right_idles_right() {
        let mut body = body_at(0.0, 0.0);
        body.intent_move(Direction::Right);
        body.intent_stop();
        assert_eq!(body.activity(), Activity::IdleRight);
        assert_eq!(body.velocity(), Vec2::ZERO);
    }

    #[test]
    fn test_stop_after_moving_up_idles_up() {
        let mut body = body_at(0.0, 0.0);
        body.intent_move(Direction::Up);
        body.intent_stop();
        assert_eq!(body.activity(), Activity::IdleUp);
    }

    #[test]
    fn test_stop_resolves_every_direction() {
        for direction in Direction::ALL {
            let mut body = body_at(0.0, 0.0);
            body.intent_move(direction);
            body.intent_stop();
            assert_eq!(body.activity(), Activity::idle(direction));
        }
    }

    #[test]
    fn test_stop_is_idempotent() {
        let mut body = body_at(0.0, 0.0);
        body.intent_move(Direction::Left);
        body.intent_stop();
        body.intent_stop();
        assert_eq!(body.activity(), Activity::IdleLeft);
    }

    #[test]
    fn test_advance_moves_when_free() {
        let mut body = body_at(100.0, 100.0);
        body.intent_move(Direction::Down);

        let outcome = body.advance(0.5, &free);
        assert_eq!(outcome, MoveOutcome::Moved);
        assert_relative_eq!(body.position().x, 100.0);
        assert_relative_eq!(body.position().y, 150.0);
    }

    #[test]
    fn test_blocked_move_leaves_everything_but_animation() {
        let mut body = body_at(100.0, 100.0);
        body.intent_move(Direction::Left);

        let outcome = body.advance(0.3, &solid);
        assert_eq!(outcome, MoveOutcome::Blocked);
        assert_eq!(body.position(), Vec2::new(100.0, 100.0));
        assert_eq!(body.velocity(), Vec2::new(-100.0, 0.0));
        assert_eq!(body.activity(), Activity::WalkLeft);
        assert_eq!(body.animation_cycle(), 1);
    }

    #[test]
    fn test_query_sees_candidate_rect() {
        let mut body = body_at(0.0, 0.0);
        body.intent_move(Direction::Right);

        let seen = std::cell::Cell::new(None);
        let recorder = |rect: &Rect| {
            seen.set(Some(*rect));
            false
        };
        body.advance(0.1, &recorder);

        let rect = seen.get().unwrap();
        assert_relative_eq!(rect.x, 10.0);
        assert_relative_eq!(rect.y, 0.0);
        assert_eq!((rect.w, rect.h), (32.0, 32.0));
    }

    #[test]
    fn test_zero_velocity_skips_query() {
        let mut body = body_at(0.0, 0.0);
        let panicking = |_: &Rect| -> bool { panic!("no query expected") };
        assert_eq!(body.advance(0.1, &panicking), MoveOutcome::Stationary);
    }

    #[test]
    fn test_two_frame_walk_cycles_and_wraps() {
        let idle = DirectionalFrames::new(vec![0], vec![0], vec![0], vec![0]);
        let walk = DirectionalFrames::new(vec![1, 2], vec![1, 2], vec![1, 2], vec![5, 6]);
        let frames = FrameTables::new(idle, walk).unwrap();
        let mut body = AnimatedBody::new(Vec2::ZERO, BodyStats::default(), frames);
        body.intent_move(Direction::Right);

        assert_eq!(body.animation_cycle(), 0);
        assert_eq!(body.animation_age(), 0.0);

        body.advance(0.3, &free);
        assert_eq!(body.animation_cycle(), 1);
        assert_eq!(body.current_frame(), 6);

        body.advance(0.3, &free);
        assert_eq!(body.animation_cycle(), 2);
        assert_eq!(body.current_frame(), 5);
    }

    #[test]
    fn test_idle_body_still_animates() {
        let mut body = body_at(0.0, 0.0);
        for _ in 0..3 {
            body.advance(0.25, &free);
        }
        assert_eq!(body.animation_cycle(), 3);
        assert_eq!(body.position(), Vec2::ZERO);
        assert_eq!(body.active_sequence(), &[1]);
    }

    #[test]
    fn test_small_deltas_accumulate() {
        let mut body = body_at(0.0, 0.0);
        for _ in 0..14 {
            body.advance(1.0 / 60.0, &free);
        }
        assert_eq!(body.animation_cycle(), 0);
        body.advance(1.0 / 60.0, &free);
        assert_eq!(body.animation_cycle(), 1);
        assert_eq!(body.animation_age(), 0.0);
    }
}
