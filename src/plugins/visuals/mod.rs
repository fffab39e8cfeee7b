//! Visuals plugin (render-only): sun light and meshes for gameplay entities.
//!
//! Gameplay entities are spawned without meshes so they work in headless apps. This plugin
//! attaches `Mesh3d` + `MeshMaterial3d` the moment a marker shows up.

use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::hook::{GrappleHook, RopeVisual};
use crate::plugins::player::{Player, CAPSULE_HALF_HEIGHT, CAPSULE_RADIUS};
use crate::plugins::world::WorldBlock;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_sun)
        .add_systems(
            Update,
            (dress_blocks, dress_player, dress_hooks, dress_ropes)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_sun(mut commands: Commands) {
    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: 12_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(2000.0, 1500.0, 4000.0).looking_at(Vec3::ZERO, Vec3::Z),
        DespawnOnExit(GameState::InGame),
    ));
}

fn dress_blocks(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<(Entity, &WorldBlock), Added<WorldBlock>>,
) {
    for (e, block) in &q {
        commands.entity(e).insert((
            Mesh3d(meshes.add(Cuboid::from_size(block.size))),
            MeshMaterial3d(materials.add(block.color)),
        ));
    }
}

/// Capsule meshes are Y-aligned; the child rotates it onto +Z.
fn dress_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<Entity, Added<Player>>,
) {
    for e in &q {
        let segment = (CAPSULE_HALF_HEIGHT - CAPSULE_RADIUS) * 2.0;
        commands.entity(e).with_child((
            Mesh3d(meshes.add(Capsule3d::new(CAPSULE_RADIUS, segment))),
            MeshMaterial3d(materials.add(Color::srgb(0.2, 0.75, 0.9))),
            Transform::from_rotation(Quat::from_rotation_x(FRAC_PI_2)),
        ));
    }
}

fn dress_hooks(
    mut commands: Commands,
    tunables: Res<Tunables>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<Entity, Added<GrappleHook>>,
) {
    for e in &q {
        commands.entity(e).insert((
            Mesh3d(meshes.add(Sphere::new(tunables.hook_radius * 2.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.85, 0.85, 0.9))),
        ));
    }
}

fn dress_ropes(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    q: Query<Entity, Added<RopeVisual>>,
) {
    for e in &q {
        commands.entity(e).insert((
            Mesh3d(meshes.add(Cuboid::new(1.0, 1.0, 1.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.15, 0.12, 0.1))),
        ));
    }
}
