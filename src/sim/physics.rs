//! Per-frame motion and playfield border reflection
//!
//! All units are pixels and frames; screen y grows downward.

use glam::Vec2;

/// Axis-aligned playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    /// Playfield spanning `(0, 0)` to `(width, height)`
    pub fn screen(width: f32, height: f32) -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::new(width, height),
        }
    }
}

/// Which walls of the playfield reflect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Walls {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl Walls {
    /// Left, right and top; the floor stays open
    pub const OPEN_FLOOR: Walls = Walls {
        left: true,
        right: true,
        top: true,
        bottom: false,
    };
    pub const TOP_BOTTOM: Walls = Walls {
        left: false,
        right: false,
        top: true,
        bottom: true,
    };
}

/// Result of a border check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reflection {
    pub pos: Vec2,
    pub vel: Vec2,
}

/// Add one frame of downward gravity
#[inline]
pub fn apply_gravity(vel: Vec2, gravity: f32) -> Vec2 {
    vel + Vec2::new(0.0, gravity)
}

/// Advance a position by one frame of velocity
#[inline]
pub fn integrate(pos: Vec2, vel: Vec2) -> Vec2 {
    pos + vel
}

/// Reflect a circular body off the enabled walls.
///
/// A wall is hit once the body's edge reaches it (inclusive) while moving
/// toward it. The body is clamped exactly to the wall and that velocity
/// component flips sign. A body overlapping a wall while already moving away
/// is clamped without flipping.
pub fn reflect_off_walls(pos: Vec2, vel: Vec2, radius: f32, bounds: Bounds, walls: Walls) -> Reflection {
    let mut out = Reflection { pos, vel };

    if walls.left && pos.x - radius <= bounds.min.x {
        out.pos.x = bounds.min.x + radius;
        if vel.x < 0.0 {
            out.vel.x = -vel.x;
        }
    } else if walls.right && pos.x + radius >= bounds.max.x {
        out.pos.x = bounds.max.x - radius;
        if vel.x > 0.0 {
            out.vel.x = -vel.x;
        }
    }

    if walls.top && pos.y - radius <= bounds.min.y {
        out.pos.y = bounds.min.y + radius;
        if vel.y < 0.0 {
            out.vel.y = -vel.y;
        }
    } else if walls.bottom && pos.y + radius >= bounds.max.y {
        out.pos.y = bounds.max.y - radius;
        if vel.y > 0.0 {
            out.vel.y = -vel.y;
        }
    }

    out
}
