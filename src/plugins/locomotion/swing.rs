//! Swing entry geometry: rope bookkeeping and the pendulum's initial conditions.

use bevy::prelude::*;

use super::pendulum::{Pendulum, PendulumStep};

/// Rope from anchor to character, recomputed whenever it is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RopeSpan {
    pub vector: Vec3,
    pub length: f32,
}

impl RopeSpan {
    pub fn between(anchor: Vec3, player: Vec3) -> Self {
        let vector = player - anchor;
        Self {
            vector,
            length: vector.length(),
        }
    }

    /// Unit rope direction; a zero-length rope hangs straight down.
    pub fn direction(&self) -> Vec3 {
        self.vector.try_normalize().unwrap_or(Vec3::NEG_Z)
    }
}

/// Initial conditions for a swing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwingStart {
    pub angle: f32,
    /// Radians per second for `SemiImplicit`, radians per tick for `PerTick`.
    pub angular_velocity: f32,
    pub plane: Vec2,
    pub arm_length: f32,
}

impl SwingStart {
    /// Derive the swing from the rope, the character's pre-swing velocity and forward axis.
    ///
    /// - plane: horizontal components of the normalized rope; a vertical rope has none, so the
    ///   forward axis orients the plane instead.
    /// - angle: `acos(rope · down)`, so the first pendulum position is the character's position.
    /// - angular velocity: velocity projected onto forward, split into the part along the rope
    ///   and the in-plane part orthogonal to it; the latter over `r` is the swing rate.
    pub fn from_geometry(
        rope: RopeSpan,
        velocity: Vec3,
        forward: Vec3,
        step: PendulumStep,
        dt: f32,
        min_arm_length: f32,
    ) -> Self {
        let dir = rope.direction();
        let arm_length = rope.length.max(min_arm_length);

        let horizontal = dir.truncate();
        let plane = if horizontal.length_squared() > 1e-8 {
            horizontal
        } else {
            forward.truncate().try_normalize().unwrap_or(Vec2::X)
        };

        let angle = dir.dot(Vec3::NEG_Z).clamp(-1.0, 1.0).acos();

        let forward = forward.try_normalize().unwrap_or(Vec3::X);
        let v_forward = forward * velocity.dot(forward);
        let v_along_rope = dir * v_forward.dot(dir);
        let v_orthogonal = v_forward - v_along_rope;

        // d(position)/dθ, normalized.
        let plane_dir = plane.try_normalize().unwrap_or(Vec2::X);
        let (sin, cos) = angle.sin_cos();
        let tangent = Vec3::new(plane_dir.x * cos, plane_dir.y * cos, sin);

        let per_second = v_orthogonal.dot(tangent) / arm_length;
        let angular_velocity = match step {
            PendulumStep::PerTick => per_second * dt,
            PendulumStep::SemiImplicit => per_second,
        };

        Self {
            angle,
            angular_velocity,
            plane,
            arm_length,
        }
    }

    pub fn into_pendulum(self, origin: Vec3, gravity: f32, step: PendulumStep) -> Pendulum {
        Pendulum::new(origin, self.arm_length, gravity)
            .with_plane(self.plane)
            .with_angle(self.angle)
            .with_angular_velocity(self.angular_velocity)
            .with_step(step)
    }
}
