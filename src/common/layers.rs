//! Collision layers.

use avian3d::prelude::*;

#[derive(PhysicsLayer, Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    #[default]
    Default,
    World,
    Player,
    Prop,
    Hook,
}

/// Layers for a hook in flight: it hits level geometry and props, never its owner.
#[inline]
pub fn active_hook_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Hook, [Layer::World, Layer::Prop])
}

/// Collision response off without structural changes: empty filters collide with nothing.
#[inline]
pub fn inactive_hook_layers() -> CollisionLayers {
    CollisionLayers::new(Layer::Hook, [] as [Layer; 0])
}
