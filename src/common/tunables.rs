//! Tunable gameplay constants.
//!
//! Units are engine units (centimetres, see `length_unit`). The world is Z-up.

use bevy::prelude::*;

use crate::plugins::locomotion::pendulum::PendulumStep;

/// Which collision partners count as a hook target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitFilter {
    /// Anything the hook collides with (static geometry included).
    #[default]
    AnySurface,
    /// Only bodies that are simulating physics.
    DynamicOnly,
}

#[derive(Resource, Debug, Clone)]
pub struct Tunables {
    pub length_unit: f32,
    /// Gravity magnitude, applied along -Z.
    pub gravity: f32,
    pub walk_speed: f32,
    /// Upward speed given by a jump.
    pub jump_speed: f32,
    /// Degrees per second at full input.
    pub turn_rate: f32,
    pub look_rate: f32,
    /// Radians per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Dock point relative to the player, in the player's yaw frame (X forward, Z up).
    pub muzzle_offset: Vec3,
    pub eye_height: f32,
    pub hook_launch_speed: f32,
    pub hook_retract_speed: f32,
    /// The hook docks once it is this close to the dock point.
    pub dock_threshold: f32,
    pub hook_radius: f32,
    /// Multiplier from hook velocity to the impulse handed to a struck dynamic body.
    pub hit_impulse_scale: f32,
    pub hit_filter: HitFilter,
    pub pendulum_step: PendulumStep,
    pub min_arm_length: f32,
    pub rope_thickness: f32,
}

impl Tunables {
    #[inline]
    pub fn dock_threshold_sq(&self) -> f32 {
        self.dock_threshold * self.dock_threshold
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            length_unit: 100.0,
            gravity: 980.0,
            walk_speed: 600.0,
            jump_speed: 600.0,
            turn_rate: 45.0,
            look_rate: 45.0,
            mouse_sensitivity: 0.003,
            muzzle_offset: Vec3::new(100.0, 0.0, 10.0),
            eye_height: 64.0,
            hook_launch_speed: 3000.0,
            hook_retract_speed: 3000.0,
            dock_threshold: 20.0,
            hook_radius: 5.0,
            hit_impulse_scale: 100.0,
            hit_filter: HitFilter::AnySurface,
            pendulum_step: PendulumStep::SemiImplicit,
            min_arm_length: 1.0,
            rope_thickness: 2.0,
        }
    }
}
