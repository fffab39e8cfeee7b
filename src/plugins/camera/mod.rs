//! First-person camera (render-only).
//!
//! The camera is a separate entity that chases the player's eye point. Smoothing keeps the
//! fixed-step swing positions from reading as jitter at high frame rates.
//!
//! A system cannot have `Query<&Transform>` and `Query<&mut Transform>` at the same time
//! unless Bevy can prove those queries are disjoint; the `Without<...>` filters do that.

use bevy::prelude::*;
use bevy::state::state_scoped::DespawnOnExit;

use crate::common::state::GameState;
use crate::common::tunables::Tunables;
use crate::plugins::player::{Aim, Player};

#[derive(Component)]
pub struct MainCamera {
    pub responsiveness: f32,
}

pub fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_camera)
        .add_systems(
            PostUpdate,
            follow_player
                .before(TransformSystems::Propagate)
                .run_if(in_state(GameState::InGame)),
        );
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn((
        Name::new("MainCamera"),
        Camera3d::default(),
        MainCamera { responsiveness: 25.0 },
        Transform::from_xyz(0.0, 0.0, 200.0).looking_to(Vec3::X, Vec3::Z),
        DespawnOnExit(GameState::InGame),
    ));
}

fn follow_player(
    time: Res<Time>,
    tunables: Res<Tunables>,
    // Disjointness proof: Player entities are not MainCamera entities.
    q_player: Query<(&Transform, &Aim), (With<Player>, Without<MainCamera>)>,
    // Disjointness proof: MainCamera entities are not Player entities.
    mut q_cam: Query<(&mut Transform, &MainCamera), Without<Player>>,
) {
    let Ok((tf_player, aim)) = q_player.single() else {
        return;
    };
    let Ok((mut tf_cam, main_cam)) = q_cam.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    let alpha = 1.0 - (-main_cam.responsiveness * dt).exp();

    let eye = tf_player.translation + Vec3::Z * tunables.eye_height;
    tf_cam.translation = tf_cam.translation.lerp(eye, alpha);
    tf_cam.look_to(aim.direction(), Vec3::Z);
}
