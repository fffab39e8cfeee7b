//! Per-tick hook driver.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::fsm::Step;
use crate::common::layers::{active_hook_layers, inactive_hook_layers};
use crate::common::tunables::Tunables;

use super::components::{dock_point, GrappleHook, HookAnchor};
use super::state::{entry_actions, HookAction, HookState};

/// Run entry actions on the tick after a transition, per-state bodies otherwise.
///
/// The dock is refreshed from the owner first so every state sees this tick's muzzle position.
pub fn tick_hooks(
    time: Res<Time>,
    tunables: Res<Tunables>,
    mut q_hooks: Query<(
        &mut GrappleHook,
        &mut HookAnchor,
        &mut Transform,
        &mut LinearVelocity,
        &mut MaxLinearSpeed,
        &mut CollisionLayers,
    )>,
    q_owners: Query<&Transform, Without<GrappleHook>>,
) {
    let dt = time.delta_secs();

    for (mut hook, mut anchor, mut tf, mut vel, mut max_speed, mut layers) in &mut q_hooks {
        let owner_tf = q_owners
            .get(hook.owner())
            .expect("GrappleHook owner has no Transform");
        anchor.set_dock(dock_point(owner_tf, tunables.muzzle_offset));

        match hook.step() {
            Step::Enter(state) => {
                for action in entry_actions(state) {
                    match action {
                        HookAction::EnableCollision => *layers = active_hook_layers(),
                        HookAction::DisableCollision => *layers = inactive_hook_layers(),
                        HookAction::HaltMotion => {
                            vel.0 = Vec3::ZERO;
                            max_speed.0 = 0.0;
                        }
                        HookAction::Launch => {
                            let speed = tunables.hook_launch_speed;
                            tf.translation = anchor.dock();
                            tf.rotation = Quat::from_rotation_arc(Vec3::X, hook.aim());
                            vel.0 = hook.aim() * speed;
                            max_speed.0 = speed;
                        }
                        HookAction::SnapToDock => tf.translation = anchor.dock(),
                        HookAction::PinToImpact => {
                            // Hooked is only entered through `hit`, which latches first.
                            let impact = hook
                                .latched()
                                .expect("Hooked entered without a latched hit")
                                .impact_point;
                            tf.translation = impact;
                            anchor.attach_at(impact);
                        }
                        HookAction::Detach => {
                            anchor.detach();
                            hook.clear_latch();
                        }
                        HookAction::ShowRope => hook.set_rope_shown(true),
                        HookAction::HideRope => hook.set_rope_shown(false),
                    }
                }
                debug!("hook: entered {state:?}");
            }
            Step::Update(HookState::Docked) => tf.translation = anchor.dock(),
            Step::Update(HookState::Retracting) => {
                let max_step = tunables.hook_retract_speed * dt;
                tf.translation = step_towards(tf.translation, anchor.dock(), max_step);
                if tf.translation.distance_squared(anchor.dock()) <= tunables.dock_threshold_sq() {
                    hook.arrive();
                }
            }
            Step::Update(HookState::Launching | HookState::Hooked) => {}
        }
    }
}

/// Move `from` toward `to` by at most `max_step`, never past it.
#[inline]
pub fn step_towards(from: Vec3, to: Vec3, max_step: f32) -> Vec3 {
    let delta = to - from;
    let dist = delta.length();
    if dist <= max_step || dist <= f32::EPSILON {
        to
    } else {
        from + delta / dist * max_step
    }
}
