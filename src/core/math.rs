// Geometry helpers: axis-aligned rectangles in pixel space

use glam::Vec2;

/// Axis-aligned box in pixel space, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build a rectangle from a top-left position and a size
    pub fn from_position_size(position: Vec2, size: Vec2) -> Self {
        Self::new(position.x, position.y, size.x, size.y)
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Trailing edge on the x axis (`x + w`)
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Trailing edge on the y axis (`y + h`)
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Check whether two rectangles share any interior area
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let rect = Rect::new(10.0, 20.0, 32.0, 16.0);
        assert_eq!(rect.right(), 42.0);
        assert_eq!(rect.bottom(), 36.0);
        assert_eq!(rect.position(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_rect_from_position_size() {
        let rect = Rect::from_position_size(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(rect, Rect::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_overlap_is_exclusive_at_edges() {
        let a = Rect::new(0.0, 0.0, 40.0, 40.0);
        let touching = Rect::new(40.0, 0.0, 40.0, 40.0);
        let inside = Rect::new(39.0, 39.0, 10.0, 10.0);
        assert!(!a.overlaps(&touching));
        assert!(a.overlaps(&inside));
    }
}
