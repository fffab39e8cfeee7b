//! Turn Avian `CollisionStart` messages into hook hits.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::common::tunables::{HitFilter, Tunables};

use super::components::{GrappleHook, HookHit};
use super::messages::HookImpulse;

#[derive(Clone, Copy, Debug)]
struct CollisionTarget {
    collider: Entity,
    body: Option<Entity>,
}

impl CollisionTarget {
    #[inline]
    fn gameplay_owner(self) -> Entity {
        self.body.unwrap_or(self.collider)
    }
}

#[inline]
fn targets(ev: &CollisionStart) -> (CollisionTarget, CollisionTarget) {
    (
        CollisionTarget {
            collider: ev.collider1,
            body: ev.body1,
        },
        CollisionTarget {
            collider: ev.collider2,
            body: ev.body2,
        },
    )
}

/// Resolve hook collisions.
///
/// A hit counts when the other side still exists, is neither the hook nor its owner, and passes
/// the configured `HitFilter`. Only a launching hook reacts; `GrappleHook::hit` ignores the rest.
/// Striking a dynamic body also requests an impulse along the hook's velocity.
pub fn process_hook_collisions(
    tunables: Res<Tunables>,
    mut started: MessageReader<CollisionStart>,
    mut q_hooks: Query<(&mut GrappleHook, &Transform, &LinearVelocity)>,
    q_exists: Query<()>,
    q_bodies: Query<&RigidBody>,
    mut impulses: MessageWriter<HookImpulse>,
) {
    for ev in started.read() {
        let (t1, t2) = targets(ev);

        let (hook_side, other_side) = if q_hooks.contains(t1.collider) {
            (t1, t2)
        } else if q_hooks.contains(t2.collider) {
            (t2, t1)
        } else {
            continue;
        };

        let Ok((mut hook, tf, vel)) = q_hooks.get_mut(hook_side.collider) else {
            continue;
        };

        let target = other_side.gameplay_owner();
        if !q_exists.contains(target) || !q_exists.contains(other_side.collider) {
            debug!("hook: hit on a despawned entity {target:?} ignored");
            continue;
        }
        if target == hook_side.collider || target == hook.owner() {
            continue;
        }

        let dynamic = matches!(q_bodies.get(target), Ok(RigidBody::Dynamic));
        if tunables.hit_filter == HitFilter::DynamicOnly && !dynamic {
            continue;
        }

        let hit = HookHit {
            target,
            collider: other_side.collider,
            impact_point: tf.translation,
        };
        if !hook.hit(hit) {
            continue;
        }

        if dynamic {
            let speed = vel.0.length();
            if let Some(direction) = vel.0.try_normalize() {
                impulses.write(HookImpulse {
                    target,
                    direction,
                    magnitude: speed * tunables.hit_impulse_scale,
                    point: tf.translation,
                });
            }
        }
    }
}

/// Apply hook impulses at the impact point.
///
/// Avian applies impulses to velocity immediately; an off-centre point also spins the body.
pub fn apply_hook_impulses(mut reader: MessageReader<HookImpulse>, mut q_targets: Query<Forces>) {
    for imp in reader.read() {
        let Ok(mut forces) = q_targets.get_mut(imp.target) else {
            debug!("hook: impulse target {:?} is not a dynamic body", imp.target);
            continue;
        };
        forces.apply_linear_impulse_at_point(imp.direction * imp.magnitude, imp.point);
    }
}
