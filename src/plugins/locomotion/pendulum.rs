//! Single-plane pendulum.
//!
//! The bob swings in the vertical plane that contains the rope's horizontal direction at swing
//! start. `angle` is measured from straight down; a positive angle displaces the bob along the
//! plane direction.
//!
//! ```text
//!            origin
//!              ●
//!              │╲
//!              │θ╲  r
//!              │  ╲
//!                  ● position = origin + (dir * r sin θ, -r cos θ)
//! ```

use bevy::prelude::*;

/// How `update` integrates angular velocity and angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PendulumStep {
    /// Increments are applied once per call, independent of `dt`. Swing speed depends on the
    /// tick rate; angular velocity is in radians per tick.
    PerTick,
    /// Semi-implicit Euler: `ω += α·dt`, then `θ += ω·dt`. Angular velocity is in radians per
    /// second.
    #[default]
    SemiImplicit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pendulum {
    origin: Vec3,
    r: f32,
    angle: f32,
    angular_velocity: f32,
    angular_acceleration: f32,
    damping: f32,
    gravity: f32,
    plane_x: f32,
    plane_y: f32,
    step: PendulumStep,
    position: Vec3,
}

impl Pendulum {
    /// Stored for parity with the swing model; `update` never applies it.
    pub const DAMPING: f32 = 0.995;

    /// A pendulum hanging at rest below `origin`.
    ///
    /// `gravity` is signed along the up axis, so ordinary gravity is negative (e.g. `-980.0`).
    pub fn new(origin: Vec3, arm_length: f32, gravity: f32) -> Self {
        let mut p = Self {
            origin,
            r: arm_length,
            angle: 0.0,
            angular_velocity: 0.0,
            angular_acceleration: 0.0,
            damping: Self::DAMPING,
            gravity,
            plane_x: 1.0,
            plane_y: 0.0,
            step: PendulumStep::default(),
            position: Vec3::ZERO,
        };
        p.position = p.position_at(p.angle);
        p
    }

    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self.position = self.position_at(angle);
        self
    }

    pub fn with_angular_velocity(mut self, angular_velocity: f32) -> Self {
        self.angular_velocity = angular_velocity;
        self
    }

    /// Bias the swing into the vertical plane through `plane` (horizontal XY components).
    pub fn with_plane(mut self, plane: Vec2) -> Self {
        self.plane_x = plane.x;
        self.plane_y = plane.y;
        self.position = self.position_at(self.angle);
        self
    }

    pub fn with_step(mut self, step: PendulumStep) -> Self {
        self.step = step;
        self
    }

    /// Advance one tick.
    pub fn update(&mut self, dt: f32) {
        self.angular_acceleration = (self.gravity / self.r) * self.angle.sin();

        match self.step {
            PendulumStep::PerTick => {
                self.angular_velocity += self.angular_acceleration;
                self.angle += self.angular_velocity;
            }
            PendulumStep::SemiImplicit => {
                self.angular_velocity += self.angular_acceleration * dt;
                self.angle += self.angular_velocity * dt;
            }
        }

        self.position = self.position_at(self.angle);
    }

    /// Unit horizontal direction of the swing plane.
    ///
    /// A zero plane has no direction; it swings along +X rather than producing NaN.
    #[inline]
    pub fn plane_dir(&self) -> Vec2 {
        Vec2::new(self.plane_x, self.plane_y)
            .try_normalize()
            .unwrap_or(Vec2::X)
    }

    fn position_at(&self, angle: f32) -> Vec3 {
        let dir = self.plane_dir();
        let (sin, cos) = angle.sin_cos();
        self.origin + Vec3::new(dir.x * self.r * sin, dir.y * self.r * sin, -self.r * cos)
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn arm_length(&self) -> f32 {
        self.r
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn angular_velocity(&self) -> f32 {
        self.angular_velocity
    }

    pub fn angular_acceleration(&self) -> f32 {
        self.angular_acceleration
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn gravity(&self) -> f32 {
        self.gravity
    }

    pub fn plane(&self) -> Vec2 {
        Vec2::new(self.plane_x, self.plane_y)
    }

    pub fn step(&self) -> PendulumStep {
        self.step
    }
}
