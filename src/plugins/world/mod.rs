//! World plugin: floor, ledges, overhead beams to hook onto, and a loose crate.
//!
//! Gameplay only spawns colliders plus a `WorldBlock` description; the render-only visuals
//! plugin turns blocks into meshes.

use avian3d::prelude::*;
use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::layers::Layer;
use crate::common::state::GameState;

const FLOOR_HALF: f32 = 4000.0;
const BEAM_HEIGHT: f32 = 1400.0;

/// Box-shaped level piece.
#[derive(Component, Debug, Clone, Copy)]
pub struct WorldBlock {
    pub size: Vec3,
    pub color: Color,
}

/// Dynamic prop the hook can knock around.
#[derive(Component, Debug, Clone, Copy)]
pub struct Crate;

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), (spawn_level, spawn_crate));
}

fn spawn_level(mut commands: Commands) {
    let world_layers =
        CollisionLayers::new(Layer::World, [Layer::Player, Layer::Prop, Layer::Hook]);

    let mut spawn_block = |name: &str, pos: Vec3, size: Vec3, color: Color| {
        commands.spawn((
            Name::new(name.to_owned()),
            WorldBlock { size, color },
            Transform::from_translation(pos),
            Visibility::Visible,
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            world_layers,
            DespawnOnExit(GameState::InGame),
        ));
    };

    spawn_block(
        "Floor",
        Vec3::new(0.0, 0.0, -10.0),
        Vec3::new(FLOOR_HALF * 2.0, FLOOR_HALF * 2.0, 20.0),
        Color::srgb(0.32, 0.34, 0.3),
    );

    let beam_color = Color::srgb(0.45, 0.3, 0.2);
    (0..4)
        .map(|i| 1200.0 + i as f32 * 1500.0)
        .enumerate()
        .for_each(|(i, x)| {
            spawn_block(
                &format!("Beam{i}"),
                Vec3::new(x, 0.0, BEAM_HEIGHT),
                Vec3::new(120.0, 3000.0, 120.0),
                beam_color,
            );
        });

    let ledge_color = Color::srgb(0.5, 0.52, 0.56);
    spawn_block(
        "LedgeFar",
        Vec3::new(7000.0, 0.0, 300.0),
        Vec3::new(1200.0, 2000.0, 600.0),
        ledge_color,
    );
    spawn_block(
        "LedgeSide",
        Vec3::new(2500.0, 2500.0, 450.0),
        Vec3::new(800.0, 800.0, 900.0),
        ledge_color,
    );
}

fn spawn_crate(mut commands: Commands) {
    let size = Vec3::splat(100.0);

    commands.spawn((
        Name::new("Crate"),
        Crate,
        WorldBlock {
            size,
            color: Color::srgb(0.8, 0.6, 0.25),
        },
        Transform::from_xyz(900.0, -400.0, size.z * 0.5),
        Visibility::Visible,
        RigidBody::Dynamic,
        Collider::cuboid(size.x, size.y, size.z),
        Mass(100.0),
        CollisionLayers::new(Layer::Prop, [Layer::World, Layer::Player, Layer::Hook, Layer::Prop]),
        DespawnOnExit(GameState::InGame),
    ));
}

#[cfg(test)]
mod tests;
