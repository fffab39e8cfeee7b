//! Hook lifecycle: transition table and per-state entry actions.
//!
//! Both functions are pure. `tick_hooks` applies the actions to the hook's components.

/// Projectile lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HookState {
    #[default]
    Docked,
    Launching,
    Retracting,
    Hooked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookTrigger {
    Fire,
    Retract,
    /// A validated collision while in flight.
    Hit,
    /// The retracting hook came within the dock threshold.
    Arrived,
}

/// `None` means the trigger has no edge from `from` and must be ignored.
pub fn next_state(from: HookState, trigger: HookTrigger) -> Option<HookState> {
    use HookState::*;
    use HookTrigger::*;

    match (from, trigger) {
        (Docked, Fire) => Some(Launching),
        (Launching, Hit) => Some(Hooked),
        (Launching, Retract) | (Hooked, Retract) => Some(Retracting),
        (Retracting, Arrived) => Some(Docked),
        _ => None,
    }
}

/// One-time side effects run when a state is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookAction {
    EnableCollision,
    DisableCollision,
    /// Zero velocity and the speed cap.
    HaltMotion,
    /// Velocity along the aim at launch speed, starting from the dock.
    Launch,
    SnapToDock,
    /// Move to the latched impact point and make it the anchor.
    PinToImpact,
    /// Forget the impact point; the anchor is the dock again.
    Detach,
    ShowRope,
    HideRope,
}

pub fn entry_actions(state: HookState) -> &'static [HookAction] {
    use HookAction::*;

    match state {
        HookState::Docked => &[DisableCollision, HaltMotion, Detach, SnapToDock, HideRope],
        HookState::Launching => &[EnableCollision, Launch, ShowRope],
        HookState::Retracting => &[DisableCollision, HaltMotion, Detach],
        HookState::Hooked => &[DisableCollision, HaltMotion, PinToImpact],
    }
}
