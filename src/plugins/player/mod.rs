//! Player plugin.
//!
//! Pipeline:
//! - OnEnter(InGame): spawn the player, its grapple hook and the rope visual
//! - Update: sample input into `PlayerInput`, turn/pitch the `Aim`
//! - FixedUpdate: walk and jump while grounded (after locomotion decided the mode)
//!
//! The world is Z-up and the player's yaw frame has X forward, Y left.

use std::f32::consts::FRAC_PI_2;

use avian3d::prelude::*;
use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::{inactive_hook_layers, Layer};
use crate::common::{state::GameState, tunables::Tunables};
use crate::plugins::hook::components::dock_point;
use crate::plugins::hook::{GrappleHook, GrappleSystems, HookAnchor, HookLink, RopeVisual};
use crate::plugins::locomotion::{Locomotion, LocomotionState};

pub const CAPSULE_RADIUS: f32 = 55.0;
pub const CAPSULE_HALF_HEIGHT: f32 = 96.0;

#[derive(Component)]
pub struct Player;

/// Look direction. `yaw` turns about +Z, `pitch` tilts the aim up.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Aim {
    pub yaw: f32,
    pub pitch: f32,
}

impl Aim {
    pub const MAX_PITCH: f32 = FRAC_PI_2 - 0.05;

    /// Horizontal forward.
    #[inline]
    pub fn forward(&self) -> Vec3 {
        Vec3::new(self.yaw.cos(), self.yaw.sin(), 0.0)
    }

    /// Horizontal right.
    #[inline]
    pub fn right(&self) -> Vec3 {
        Vec3::new(self.yaw.sin(), -self.yaw.cos(), 0.0)
    }

    /// Unit firing direction (yaw + pitch).
    #[inline]
    pub fn direction(&self) -> Vec3 {
        let (sp, cp) = self.pitch.sin_cos();
        Vec3::new(cp * self.yaw.cos(), cp * self.yaw.sin(), sp)
    }

    #[inline]
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_z(self.yaw)
    }
}

#[derive(Resource, Default, Debug)]
struct PlayerInput {
    /// x: right, y: forward.
    move_axis: Vec2,
    /// Positive turns right.
    turn: f32,
    /// Positive looks up.
    look: f32,
    /// Latched on press in Update, consumed by the next fixed tick.
    jump: bool,
}

pub fn plugin(app: &mut App) {
    app.insert_resource(PlayerInput::default())
        .add_systems(OnEnter(GameState::InGame), spawn)
        .add_systems(Update, (gather_input, apply_aim.after(gather_input)))
        .add_systems(FixedUpdate, apply_movement.after(GrappleSystems::Locomotion));
}

fn spawn(mut commands: Commands, tunables: Res<Tunables>) {
    let layers = CollisionLayers::new(Layer::Player, [Layer::World, Layer::Prop]);
    let player_tf = Transform::from_xyz(0.0, 0.0, CAPSULE_HALF_HEIGHT + 4.0);
    let segment = CAPSULE_HALF_HEIGHT - CAPSULE_RADIUS;

    let player = commands
        .spawn((
            Name::new("Player"),
            Player,
            Aim::default(),
            Locomotion::default(),
            player_tf,
            Visibility::Visible,
            RigidBody::Dynamic,
            Collider::capsule_endpoints(
                CAPSULE_RADIUS,
                Vec3::new(0.0, 0.0, -segment),
                Vec3::new(0.0, 0.0, segment),
            ),
            LockedAxes::ROTATION_LOCKED,
            GravityScale(1.0),
            layers,
            LinearVelocity::ZERO,
            CollidingEntities::default(),
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    let dock = dock_point(&player_tf, tunables.muzzle_offset);
    let hook = commands
        .spawn((
            Name::new("GrappleHook"),
            GrappleHook::new(player),
            HookAnchor::docked_at(dock),
            Transform::from_translation(dock),
            Visibility::Visible,
            RigidBody::Dynamic,
            Collider::sphere(tunables.hook_radius),
            GravityScale(0.0),
            Restitution::ZERO,
            SweptCcd::default(),
            inactive_hook_layers(),
            LinearVelocity::ZERO,
            MaxLinearSpeed(0.0),
            // Avian only emits CollisionStart/End if one collider has this marker.
            CollisionEventsEnabled,
            DespawnOnExit(GameState::InGame),
        ))
        .id();

    commands.entity(player).insert(HookLink(hook));

    commands.spawn((
        Name::new("Rope"),
        RopeVisual { hook },
        Transform::default(),
        Visibility::Hidden,
        DespawnOnExit(GameState::InGame),
    ));
}

fn gather_input(keys: Option<Res<ButtonInput<KeyCode>>>, mut input: ResMut<PlayerInput>) {
    let Some(keys) = keys else { return; };

    let axis = |neg: KeyCode, pos: KeyCode| {
        keys.pressed(pos) as i8 as f32 - keys.pressed(neg) as i8 as f32
    };

    let move_axis = Vec2::new(
        axis(KeyCode::KeyA, KeyCode::KeyD),
        axis(KeyCode::KeyS, KeyCode::KeyW),
    );
    input.move_axis = move_axis.normalize_or_zero();
    input.turn = axis(KeyCode::ArrowLeft, KeyCode::ArrowRight);
    input.look = axis(KeyCode::ArrowDown, KeyCode::ArrowUp);
    input.jump |= keys.just_pressed(KeyCode::Space);
}

/// Turn and pitch from arrow keys (rate based) and mouse motion (delta based).
fn apply_aim(
    time: Res<Time>,
    tunables: Res<Tunables>,
    input: Res<PlayerInput>,
    mouse: Option<Res<AccumulatedMouseMotion>>,
    mut q_player: Query<(&mut Aim, &mut Transform), With<Player>>,
) {
    let Ok((mut aim, mut tf)) = q_player.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let mouse_delta = mouse.map(|m| m.delta).unwrap_or(Vec2::ZERO);

    aim.yaw -= input.turn * tunables.turn_rate.to_radians() * dt
        + mouse_delta.x * tunables.mouse_sensitivity;
    aim.pitch = (aim.pitch + input.look * tunables.look_rate.to_radians() * dt
        - mouse_delta.y * tunables.mouse_sensitivity)
        .clamp(-Aim::MAX_PITCH, Aim::MAX_PITCH);

    tf.rotation = aim.rotation();
}

/// Walk along the aim's horizontal axes and jump off whatever the player stands on.
///
/// Only while grounded, and walking only with input held, so a released swing keeps its momentum
/// until friction takes it. A jump needs a contact; it never changes the locomotion state.
fn apply_movement(
    tunables: Res<Tunables>,
    mut input: ResMut<PlayerInput>,
    mut q_player: Query<(&Locomotion, &Aim, &CollidingEntities, &mut LinearVelocity), With<Player>>,
) {
    // A press is spent on the first fixed tick after it, whether or not it jumps.
    let jump = std::mem::take(&mut input.jump);

    let Ok((loco, aim, contacts, mut vel)) = q_player.single_mut() else {
        return;
    };
    if loco.state() != LocomotionState::Grounded {
        return;
    }

    if jump && !contacts.is_empty() {
        vel.z = tunables.jump_speed;
        debug!("player: jump");
    }

    if input.move_axis == Vec2::ZERO {
        return;
    }

    let wish = aim.forward() * input.move_axis.y + aim.right() * input.move_axis.x;
    vel.x = wish.x * tunables.walk_speed;
    vel.y = wish.y * tunables.walk_speed;
}

#[cfg(test)]
mod tests;
