use crate::constants::{
    CURSOR_DOT_FACTOR, CURSOR_FOLLOWER_FACTOR, MAGNETIC_RADIUS_PX, MAGNETIC_STRENGTH,
};
use crate::easing::approach;
use glam::Vec2;

/// A marker eased toward a target every frame.
#[derive(Clone, Copy, Debug)]
pub struct EasedPoint {
    pub pos: Vec2,
    factor: f32,
}

impl EasedPoint {
    pub fn new(factor: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            factor: factor.clamp(0.0, 1.0),
        }
    }

    pub fn step(&mut self, target: Vec2) -> Vec2 {
        self.pos = Vec2::new(
            approach(self.pos.x, target.x, self.factor),
            approach(self.pos.y, target.y, self.factor),
        );
        self.pos
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: Vec2,
    pub follower: Vec2,
}

/// Tight dot plus a slower follower ring chasing the last pointer position.
#[derive(Clone, Copy, Debug)]
pub struct CursorTracker {
    pointer: Vec2,
    dot: EasedPoint,
    follower: EasedPoint,
}

impl Default for CursorTracker {
    fn default() -> Self {
        Self::new(CURSOR_DOT_FACTOR, CURSOR_FOLLOWER_FACTOR)
    }
}

impl CursorTracker {
    pub fn new(dot_factor: f32, follower_factor: f32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            dot: EasedPoint::new(dot_factor),
            follower: EasedPoint::new(follower_factor),
        }
    }

    pub fn set_pointer(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn step(&mut self) -> CursorFrame {
        CursorFrame {
            dot: self.dot.step(self.pointer),
            follower: self.follower.step(self.pointer),
        }
    }
}

/// Translation pulling a magnetic element toward the pointer.
///
/// Returns `None` when the pointer is at or beyond the magnetic radius. Inside
/// it, the pull scales with `1 - distance / radius`.
pub fn magnetic_offset(pointer: Vec2, center: Vec2) -> Option<Vec2> {
    let delta = pointer - center;
    let distance = delta.length();
    if distance >= MAGNETIC_RADIUS_PX {
        return None;
    }
    let falloff = (MAGNETIC_RADIUS_PX - distance) / MAGNETIC_RADIUS_PX;
    Some(delta * falloff * MAGNETIC_STRENGTH)
}
