//! Feature plugins.

use bevy::prelude::*;

use crate::plugins::hook::HookPlugin;

pub mod core;
pub mod hook;
pub mod locomotion;
pub mod physics;
pub mod player;
pub mod world;

// Render-only
pub mod camera;
pub mod visuals;

/// Register gameplay plugins that work in headless tests.
pub fn register_gameplay(app: &mut App) {
    core::plugin(app);
    physics::plugin(app);
    world::plugin(app);
    player::plugin(app);
    locomotion::plugin(app);
    app.add_plugins(HookPlugin);
}

/// Register render-only plugins (requires DefaultPlugins / render infra).
pub fn register_render(app: &mut App) {
    visuals::plugin(app);
    camera::plugin(app);
}

