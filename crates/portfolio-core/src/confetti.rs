//! Celebration confetti: falling, spinning squares.

use crate::cancel::LoopControl;
use crate::constants::CONFETTI_PALETTE;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct ConfettiPiece {
    pub position: Vec2,
    pub size: f32,
    /// Per-frame motion: x is horizontal drift, y the fall speed.
    pub velocity: Vec2,
    pub color: &'static str,
    pub rotation_deg: f32,
    pub rotation_speed: f32,
}

impl ConfettiPiece {
    /// Random piece somewhere in the band one canvas-height above the top.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        ConfettiPiece {
            position: Vec2::new(
                rng.gen_range(0.0..width.max(1.0)),
                rng.gen_range(0.0..height.max(1.0)) - height,
            ),
            size: rng.gen_range(4.0..12.0),
            velocity: Vec2::new(rng.gen_range(-1.0..1.0), rng.gen_range(2.0..5.0)),
            color: CONFETTI_PALETTE[rng.gen_range(0..CONFETTI_PALETTE.len())],
            rotation_deg: rng.gen_range(0.0..360.0),
            rotation_speed: rng.gen_range(-5.0..5.0),
        }
    }

    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.rotation_deg += self.rotation_speed;
    }
}

/// Batch of pieces; each leaves the set once it falls past `height`.
#[derive(Clone, Debug)]
pub struct ConfettiBurst {
    pieces: Vec<ConfettiPiece>,
    height: f32,
}

impl ConfettiBurst {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, count: usize, width: f32, height: f32) -> Self {
        let pieces = (0..count)
            .map(|_| ConfettiPiece::random(rng, width, height))
            .collect();
        Self { pieces, height }
    }

    pub fn from_pieces(pieces: Vec<ConfettiPiece>, height: f32) -> Self {
        Self { pieces, height }
    }

    /// Add another batch to a burst that is still falling.
    pub fn extend(&mut self, pieces: impl IntoIterator<Item = ConfettiPiece>) {
        self.pieces.extend(pieces);
    }

    pub fn pieces(&self) -> &[ConfettiPiece] {
        &self.pieces
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Move every piece one frame and drop the ones below the canvas.
    pub fn step(&mut self) -> LoopControl {
        let height = self.height;
        for p in &mut self.pieces {
            p.advance();
        }
        self.pieces.retain(|p| p.position.y <= height);
        LoopControl::continue_if(!self.pieces.is_empty())
    }
}
