use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::layers::Layer;
use crate::common::test_utils::run_system_once;
use crate::common::tunables::Tunables;
use crate::plugins::hook::{GrappleHook, HookAnchor, HookLink, HookState, RopeVisual};
use crate::plugins::locomotion::{Locomotion, LocomotionState};

use super::{Aim, Player, PlayerInput};

fn movement_world(state: LocomotionState, move_axis: Vec2) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    world.insert_resource(PlayerInput { move_axis, ..default() });
    let player = world
        .spawn((
            Player,
            Aim::default(),
            Locomotion::new(state),
            LinearVelocity(Vec3::new(5.0, 5.0, -30.0)),
            CollidingEntities::default(),
        ))
        .id();
    (world, player)
}

/// A player standing on something, with a jump press waiting for the fixed tick.
fn jump_world(state: LocomotionState) -> (World, Entity) {
    let (mut world, player) = movement_world(state, Vec2::ZERO);
    let floor = world.spawn(Name::new("Floor")).id();
    world.get_mut::<CollidingEntities>(player).unwrap().insert(floor);
    world.resource_mut::<PlayerInput>().jump = true;
    (world, player)
}

#[test]
fn spawn_creates_player_hook_and_rope() {
    let mut world = World::new();
    world.insert_resource(Tunables::default());
    run_system_once(&mut world, super::spawn);

    let mut q_player = world.query_filtered::<(Entity, &HookLink, &Transform), With<Player>>();
    let (player, link, player_tf) = q_player.single(&world).unwrap();
    let (player, hook_e, player_pos) = (player, link.0, player_tf.translation);

    let hook = world.get::<GrappleHook>(hook_e).unwrap();
    assert_eq!(hook.owner(), player);
    assert_eq!(hook.state(), HookState::Docked);

    let dock = world.get::<HookAnchor>(hook_e).unwrap().dock();
    assert_eq!(dock, player_pos + world.resource::<Tunables>().muzzle_offset);

    // Docked hooks collide with nothing.
    let layers = world.get::<CollisionLayers>(hook_e).unwrap();
    assert!(layers.memberships.has_all(Layer::Hook));
    assert!(!layers.filters.has_all(Layer::World));

    let mut q_rope = world.query::<(&RopeVisual, &Visibility)>();
    let (rope, vis) = q_rope.single(&world).unwrap();
    assert_eq!(rope.hook, hook_e);
    assert_eq!(*vis, Visibility::Hidden);

    assert_eq!(
        world.get::<Locomotion>(player).unwrap().state(),
        LocomotionState::Grounded
    );
}

#[test]
fn apply_movement_walks_along_aim_while_grounded() {
    let (mut world, player) = movement_world(LocomotionState::Grounded, Vec2::new(0.0, 1.0));

    run_system_once(&mut world, super::apply_movement);

    let speed = world.resource::<Tunables>().walk_speed;
    let v = world.get::<LinearVelocity>(player).unwrap().0;
    assert!(v.abs_diff_eq(Vec3::new(speed, 0.0, -30.0), 1e-3));
}

#[test]
fn apply_movement_strafes_right() {
    let (mut world, player) = movement_world(LocomotionState::Grounded, Vec2::new(1.0, 0.0));

    run_system_once(&mut world, super::apply_movement);

    let speed = world.resource::<Tunables>().walk_speed;
    let v = world.get::<LinearVelocity>(player).unwrap().0;
    assert!(v.abs_diff_eq(Vec3::new(0.0, -speed, -30.0), 1e-3));
}

#[test]
fn apply_movement_keeps_momentum_without_input() {
    let (mut world, player) = movement_world(LocomotionState::Grounded, Vec2::ZERO);

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().0,
        Vec3::new(5.0, 5.0, -30.0)
    );
}

#[test]
fn apply_movement_is_ignored_while_swinging() {
    let (mut world, player) = movement_world(LocomotionState::Swinging, Vec2::new(0.0, 1.0));

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().0,
        Vec3::new(5.0, 5.0, -30.0)
    );
}

#[test]
fn jump_lifts_a_grounded_player_in_contact() {
    let (mut world, player) = jump_world(LocomotionState::Grounded);

    run_system_once(&mut world, super::apply_movement);

    let jump = world.resource::<Tunables>().jump_speed;
    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().0,
        Vec3::new(5.0, 5.0, jump)
    );
    assert!(!world.resource::<PlayerInput>().jump);

    // Jumping is a velocity change only.
    let loco = world.get::<Locomotion>(player).unwrap();
    assert_eq!(loco.state(), LocomotionState::Grounded);
}

#[test]
fn jump_walks_and_lifts_on_the_same_tick() {
    let (mut world, player) = jump_world(LocomotionState::Grounded);
    world.resource_mut::<PlayerInput>().move_axis = Vec2::new(0.0, 1.0);

    run_system_once(&mut world, super::apply_movement);

    let tunables = world.resource::<Tunables>();
    let expected = Vec3::new(tunables.walk_speed, 0.0, tunables.jump_speed);
    let v = world.get::<LinearVelocity>(player).unwrap().0;
    assert!(v.abs_diff_eq(expected, 1e-3));
}

#[test]
fn jump_without_contact_is_spent() {
    let (mut world, player) = jump_world(LocomotionState::Grounded);
    world.get_mut::<CollidingEntities>(player).unwrap().clear();

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().0,
        Vec3::new(5.0, 5.0, -30.0)
    );
    // Landing later does not replay an old press.
    assert!(!world.resource::<PlayerInput>().jump);
}

#[test]
fn jump_is_ignored_while_swinging() {
    let (mut world, player) = jump_world(LocomotionState::Swinging);

    run_system_once(&mut world, super::apply_movement);

    assert_eq!(
        world.get::<LinearVelocity>(player).unwrap().0,
        Vec3::new(5.0, 5.0, -30.0)
    );
    assert!(!world.resource::<PlayerInput>().jump);
    assert_eq!(
        world.get::<Locomotion>(player).unwrap().state(),
        LocomotionState::Swinging
    );
}

#[test]
fn aim_vectors_follow_yaw_and_pitch() {
    let aim = Aim {
        yaw: std::f32::consts::FRAC_PI_2,
        pitch: 0.0,
    };
    assert!(aim.forward().abs_diff_eq(Vec3::Y, 1e-6));
    assert!(aim.right().abs_diff_eq(Vec3::X, 1e-6));
    assert!(aim.direction().abs_diff_eq(Vec3::Y, 1e-6));
    assert!((aim.rotation() * Vec3::X).abs_diff_eq(Vec3::Y, 1e-6));

    let up = Aim {
        yaw: 0.0,
        pitch: std::f32::consts::FRAC_PI_4,
    };
    let expected = Vec3::new(1.0, 0.0, 1.0).normalize();
    assert!(up.direction().abs_diff_eq(expected, 1e-6));
    assert_eq!(up.forward(), Vec3::X);
}
