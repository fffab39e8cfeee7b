use bevy::prelude::*;

use crate::common::fsm::{StateMachine, StatePhase, Step, TransitionError};

use super::state::{next_state, HookState, HookTrigger};

/// A collision the hook accepted as its attachment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HookHit {
    /// Gameplay entity that was struck (rigid body if any, else the collider).
    pub target: Entity,
    pub collider: Entity,
    pub impact_point: Vec3,
}

/// The grappling hook projectile and its lifecycle machine.
///
/// `fire`, `retract` and `hit` only move the machine; the matching entry side effects run on
/// the next `tick_hooks`.
#[derive(Component, Debug, Clone)]
pub struct GrappleHook {
    owner: Entity,
    machine: StateMachine<HookState>,
    aim: Vec3,
    latched: Option<HookHit>,
    rope_shown: bool,
}

impl GrappleHook {
    pub fn new(owner: Entity) -> Self {
        Self {
            owner,
            machine: StateMachine::new(HookState::Docked),
            aim: Vec3::X,
            latched: None,
            rope_shown: false,
        }
    }

    #[inline]
    pub fn owner(&self) -> Entity {
        self.owner
    }

    #[inline]
    pub fn state(&self) -> HookState {
        self.machine.state()
    }

    #[inline]
    pub fn phase(&self) -> StatePhase {
        self.machine.phase()
    }

    /// Unit firing direction of the last accepted `fire`.
    #[inline]
    pub fn aim(&self) -> Vec3 {
        self.aim
    }

    #[inline]
    pub fn latched(&self) -> Option<&HookHit> {
        self.latched.as_ref()
    }

    #[inline]
    pub fn rope_shown(&self) -> bool {
        self.rope_shown
    }

    /// Launch along `direction`. Only acts while docked.
    pub fn fire(&mut self, direction: Vec3) -> bool {
        if !self.apply(HookTrigger::Fire) {
            return false;
        }
        self.aim = direction.try_normalize().unwrap_or(Vec3::X);
        true
    }

    /// Pull the hook back. Only acts while launching or hooked.
    pub fn retract(&mut self) -> bool {
        self.apply(HookTrigger::Retract)
    }

    /// Latch onto `hit`. Only acts while launching; a hooked hook never re-targets.
    pub fn hit(&mut self, hit: HookHit) -> bool {
        if !self.apply(HookTrigger::Hit) {
            return false;
        }
        self.latched = Some(hit);
        true
    }

    pub(super) fn arrive(&mut self) -> bool {
        self.apply(HookTrigger::Arrived)
    }

    pub(super) fn step(&mut self) -> Step<HookState> {
        self.machine.step()
    }

    pub(super) fn set_rope_shown(&mut self, shown: bool) {
        self.rope_shown = shown;
    }

    pub(super) fn clear_latch(&mut self) {
        self.latched = None;
    }

    fn apply(&mut self, trigger: HookTrigger) -> bool {
        let from = self.machine.state();
        let Some(to) = next_state(from, trigger) else {
            debug!("hook: {trigger:?} ignored while {from:?}");
            return false;
        };

        match self.machine.transition(to, exit_hook) {
            Ok(_) => {
                debug!("hook: {from:?} -> {to:?} on {trigger:?}");
                true
            }
            Err(e) => {
                error!("hook: dropped {trigger:?}: {e}");
                false
            }
        }
    }
}

/// Every hook state leaves without side effects.
fn exit_hook(_state: HookState) -> Result<(), TransitionError<HookState>> {
    Ok(())
}

/// Where the hook is attached.
///
/// Owned by the hook: only hook systems can move it. Everyone else reads `point()`.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct HookAnchor {
    dock: Vec3,
    attachment: Option<Vec3>,
}

impl HookAnchor {
    pub fn docked_at(dock: Vec3) -> Self {
        Self {
            dock,
            attachment: None,
        }
    }

    pub fn attached(dock: Vec3, point: Vec3) -> Self {
        Self {
            dock,
            attachment: Some(point),
        }
    }

    /// Resting point on the owner's muzzle.
    #[inline]
    pub fn dock(&self) -> Vec3 {
        self.dock
    }

    #[inline]
    pub fn attachment(&self) -> Option<Vec3> {
        self.attachment
    }

    /// The impact point while attached, otherwise the dock.
    #[inline]
    pub fn point(&self) -> Vec3 {
        self.attachment.unwrap_or(self.dock)
    }

    pub(super) fn set_dock(&mut self, dock: Vec3) {
        self.dock = dock;
    }

    pub(super) fn attach_at(&mut self, point: Vec3) {
        self.attachment = Some(point);
    }

    pub(super) fn detach(&mut self) {
        self.attachment = None;
    }
}

/// On the player: its grapple hook entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookLink(pub Entity);

/// Visual rope stretched from the owner's dock to the hook.
#[derive(Component, Debug, Clone, Copy)]
pub struct RopeVisual {
    pub hook: Entity,
}

/// Dock point for an owner: muzzle offset in the owner's yaw frame.
#[inline]
pub fn dock_point(owner: &Transform, muzzle_offset: Vec3) -> Vec3 {
    owner.translation + owner.rotation * muzzle_offset
}
