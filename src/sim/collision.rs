//! Axis-aligned rectangle tests for paddles and platforms

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Whether `x` lies within the horizontal span (edges inclusive)
    #[inline]
    pub fn spans_x(&self, x: f32) -> bool {
        x >= self.left() && x <= self.right()
    }

    /// Whether `[min_y, max_y]` overlaps the vertical span (edges inclusive)
    #[inline]
    pub fn overlaps_y(&self, min_y: f32, max_y: f32) -> bool {
        max_y >= self.top() && min_y <= self.bottom()
    }
}

/// One-way landing test for a body dropping onto a platform from above.
///
/// The landing band reaches from the platform's bottom edge up to
/// `vel_y` pixels above its top, so a fast-falling body cannot skip over a
/// thin platform in a single frame. Rising bodies never land.
pub fn lands_on(body_bottom: f32, body_x: f32, vel_y: f32, platform: &Rect) -> bool {
    vel_y >= 0.0
        && body_bottom <= platform.bottom()
        && body_bottom >= platform.top() - vel_y
        && platform.spans_x(body_x)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform() -> Rect {
        Rect::new(Vec2::new(40.0, 100.0), Vec2::new(60.0, 4.0))
    }

    #[test]
    fn test_rect_edges() {
        let rect = platform();
        assert_eq!(rect.left(), 40.0);
        assert_eq!(rect.right(), 100.0);
        assert_eq!(rect.top(), 100.0);
        assert_eq!(rect.bottom(), 104.0);
        assert_eq!(rect.center(), Vec2::new(70.0, 102.0));
        assert!(rect.spans_x(40.0) && rect.spans_x(100.0));
        assert!(!rect.spans_x(100.1));
        assert!(rect.overlaps_y(90.0, 100.0));
        assert!(!rect.overlaps_y(105.0, 110.0));
    }

    #[test]
    fn test_lands_on_falling_into_band() {
        let rect = platform();
        // Bottom just above the top, falling 6px/frame: inside the widened band
        assert!(lands_on(96.0, 70.0, 6.0, &rect));
        assert!(lands_on(102.0, 70.0, 0.5, &rect));
    }

    #[test]
    fn test_lands_on_rejects_rising_and_misaligned() {
        let rect = platform();
        assert!(!lands_on(101.0, 70.0, -3.0, &rect));
        assert!(!lands_on(101.0, 10.0, 3.0, &rect));
        // Too far above for this frame's fall
        assert!(!lands_on(80.0, 70.0, 6.0, &rect));
        // Already below the platform
        assert!(!lands_on(110.0, 70.0, 6.0, &rect));
    }
}
