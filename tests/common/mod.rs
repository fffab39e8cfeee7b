//! Integration test harness.
//!
//! Keep integration tests headless:
//! - `MinimalPlugins` provides core ECS runtime.
//! - Avian wants assets, scenes, meshes and transform propagation even without a renderer.
//! - we then call `grapple_swing::game::configure_headless` to install gameplay plugins.

#![allow(dead_code)]

use std::time::Duration;

use avian3d::prelude::*;
use bevy::asset::AssetPlugin;
use bevy::ecs::message::Messages;
use bevy::prelude::*;
use bevy::scene::ScenePlugin;
use bevy::state::app::StatesPlugin;

use grapple_swing::common::state::GameState;
use grapple_swing::common::tunables::Tunables;
use grapple_swing::plugins::hook::HookPlugin;
use grapple_swing::plugins::locomotion;

pub fn app_headless() -> App {
    let mut app = App::new();

    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        AssetPlugin::default(),
        ScenePlugin,
        TransformPlugin,
    ));
    app.init_asset::<Mesh>();

    grapple_swing::game::configure_headless(&mut app);
    app
}

/// Hook + locomotion only, no physics engine: collisions are injected and schedules are run by
/// hand, one fixed tick at a time.
pub fn app_grapple_only() -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin)
        .init_state::<GameState>()
        .insert_resource(Tunables::default())
        .insert_resource(Gravity(Vec3::NEG_Z * 980.0))
        .init_resource::<Messages<CollisionStart>>()
        .add_plugins(HookPlugin);
    locomotion::plugin(&mut app);
    app
}

/// One fixed tick: FixedUpdate then FixedPostUpdate, with `Time` reporting `dt`.
pub fn fixed_tick(app: &mut App, dt: f32) {
    let world = app.world_mut();
    let mut time = Time::<()>::default();
    time.advance_by(Duration::from_secs_f32(dt));
    world.insert_resource(time);
    world.run_schedule(FixedUpdate);
    world.run_schedule(FixedPostUpdate);
}

/// The variable-rate input phase.
pub fn frame(app: &mut App) {
    app.world_mut().run_schedule(Update);
}
