use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::fsm::Step;
use crate::common::tunables::Tunables;
use crate::plugins::hook::{GrappleHook, HookAnchor, HookLink, HookState};
use crate::plugins::player::Player;

use super::swing::{RopeSpan, SwingStart};
use super::{Locomotion, LocomotionState};

/// Drive the character machine one tick. Runs after the hook tick.
///
/// A player whose `HookLink` does not resolve to a hook cannot swing at all; that is a broken
/// spawn, not a gameplay case.
pub fn tick_locomotion(
    time: Res<Time>,
    tunables: Res<Tunables>,
    gravity: Res<Gravity>,
    mut q_players: Query<
        (
            &mut Locomotion,
            &HookLink,
            &mut Transform,
            &mut LinearVelocity,
            &mut GravityScale,
        ),
        With<Player>,
    >,
    q_hooks: Query<(&GrappleHook, &HookAnchor)>,
) {
    let dt = time.delta_secs();

    for (mut loco, link, mut tf, mut vel, mut gravity_scale) in &mut q_players {
        let (hook, anchor) = q_hooks
            .get(link.0)
            .expect("HookLink points at an entity without a GrappleHook + HookAnchor");

        match loco.step() {
            Step::Enter(LocomotionState::Grounded) => {
                gravity_scale.0 = 1.0;
            }
            Step::Update(LocomotionState::Grounded) => {
                if hook.state() == HookState::Hooked {
                    let _ = loco.transition(LocomotionState::Swinging);
                }
            }
            Step::Enter(LocomotionState::Swinging) => {
                // Retracted between the transition and this entry: the anchor is the dock again.
                if hook.state() != HookState::Hooked {
                    let _ = loco.transition(LocomotionState::Grounded);
                    continue;
                }

                let origin = anchor.point();
                let rope = RopeSpan::between(origin, tf.translation);
                let start = SwingStart::from_geometry(
                    rope,
                    vel.0,
                    tf.rotation * Vec3::X,
                    tunables.pendulum_step,
                    dt,
                    tunables.min_arm_length,
                );

                vel.0 = Vec3::ZERO;
                gravity_scale.0 = 0.0;
                loco.begin_swing(start.into_pendulum(origin, gravity.0.z, tunables.pendulum_step));
                debug!("locomotion: swing from {origin} r={} θ={}", start.arm_length, start.angle);
            }
            Step::Update(LocomotionState::Swinging) => {
                if hook.state() != HookState::Hooked {
                    let release = loco.swing_velocity();
                    if loco.transition(LocomotionState::Grounded).is_ok() {
                        vel.0 = release;
                    }
                    continue;
                }

                vel.0 = Vec3::ZERO;
                if let Some(position) = loco.advance_swing(dt) {
                    tf.translation = position;
                }
            }
            Step::Enter(LocomotionState::Jumping) | Step::Update(LocomotionState::Jumping) => {}
        }
    }
}
