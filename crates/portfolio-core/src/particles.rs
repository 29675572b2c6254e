//! Ambient point-cloud background: geometry, camera and pointer-driven pose.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, PARTICLE_SPIN_PER_FRAME, PARTICLE_TILT,
};
use glam::{Mat4, Vec2, Vec3};
use rand::Rng;

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Camera looking down -Z at the cloud from `CAMERA_Z`.
    pub fn for_viewport(width: f32, height: f32) -> Self {
        let mut cam = Camera {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        };
        cam.resize(width, height);
        cam
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.aspect = width.max(1.0) / height.max(1.0);
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// Map client coordinates to \[-1, 1\] with +Y up.
pub fn pointer_ndc(client: Vec2, viewport: Vec2) -> Vec2 {
    let w = viewport.x.max(1.0);
    let h = viewport.y.max(1.0);
    Vec2::new(client.x / w * 2.0 - 1.0, -(client.y / h) * 2.0 + 1.0)
}

/// Fixed set of points plus the orientation applied to them each frame.
#[derive(Clone, Debug)]
pub struct ParticleField {
    positions: Vec<Vec3>,
    pointer: Vec2,
    spin: f32,
    rotation: Vec2,
}

impl ParticleField {
    /// `count` points uniformly distributed in a cube of edge `extent`
    /// centred on the origin.
    pub fn new<R: Rng + ?Sized>(count: usize, extent: f32, rng: &mut R) -> Self {
        let half = extent * 0.5;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        Self {
            positions,
            pointer: Vec2::ZERO,
            spin: 0.0,
            rotation: Vec2::ZERO,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn set_pointer(&mut self, ndc: Vec2) {
        self.pointer = ndc.clamp(Vec2::splat(-1.0), Vec2::splat(1.0));
    }

    /// Advance one frame; returns rotation about (X, Y) in radians.
    pub fn step(&mut self) -> Vec2 {
        self.spin = (self.spin + PARTICLE_SPIN_PER_FRAME) % std::f32::consts::TAU;
        self.rotation = Vec2::new(
            self.pointer.y * PARTICLE_TILT,
            self.spin + self.pointer.x * PARTICLE_TILT,
        );
        self.rotation
    }

    pub fn rotation(&self) -> Vec2 {
        self.rotation
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_rotation_x(self.rotation.x) * Mat4::from_rotation_y(self.rotation.y)
    }
}
