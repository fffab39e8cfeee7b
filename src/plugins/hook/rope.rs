//! Rope visual: a unit box along +Z, stretched between the owner's dock and the hook.

use bevy::prelude::*;

use crate::common::tunables::Tunables;

use super::components::{dock_point, GrappleHook, RopeVisual};

/// Transform that stretches a unit Z-aligned box from `from` to `to`.
pub fn rope_transform(from: Vec3, to: Vec3, thickness: f32) -> Transform {
    let span = to - from;
    let rotation = span
        .try_normalize()
        .map(|dir| Quat::from_rotation_arc(Vec3::Z, dir))
        .unwrap_or(Quat::IDENTITY);

    Transform {
        translation: from + span * 0.5,
        rotation,
        scale: Vec3::new(thickness, thickness, span.length()),
    }
}

/// Runs after locomotion so the rope follows this tick's player position.
pub fn update_rope_visuals(
    tunables: Res<Tunables>,
    q_hooks: Query<(&GrappleHook, &Transform), Without<RopeVisual>>,
    q_owners: Query<&Transform, (Without<GrappleHook>, Without<RopeVisual>)>,
    mut q_ropes: Query<(&RopeVisual, &mut Transform, &mut Visibility), Without<GrappleHook>>,
) {
    for (rope, mut tf, mut vis) in &mut q_ropes {
        let (hook, hook_tf) = q_hooks
            .get(rope.hook)
            .expect("RopeVisual points at an entity without a GrappleHook");

        if !hook.rope_shown() {
            *vis = Visibility::Hidden;
            continue;
        }

        let owner_tf = q_owners
            .get(hook.owner())
            .expect("GrappleHook owner has no Transform");
        let dock = dock_point(owner_tf, tunables.muzzle_offset);

        *tf = rope_transform(dock, hook_tf.translation, tunables.rope_thickness);
        *vis = Visibility::Visible;
    }
}
