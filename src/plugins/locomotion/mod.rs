//! Character locomotion: grounded movement or a pendulum swing under the hook.
//!
//! ```text
//!                hook Hooked
//!   Grounded ───────────────────► Swinging
//!      ▲                              │
//!      └──────────────────────────────┘
//!           hook no longer Hooked
//! ```
//!
//! Swinging entry derives the pendulum once from the rope geometry (see [`swing`]); every later
//! tick advances the pendulum and writes its position to the character. The physics engine keeps
//! the body but loses authority over it while swinging: velocity and gravity scale are zeroed.
//!
//! `Jumping` is declared for the movement set but has no edges. It also has no exit handler, so
//! asking to leave it fails with `TransitionError::UnhandledExit`.

pub mod pendulum;
pub mod swing;
pub mod systems;

use bevy::prelude::*;

use crate::common::fsm::{StateMachine, StatePhase, Step, TransitionError};
use crate::common::state::GameState;
use crate::plugins::hook::GrappleSystems;

use pendulum::Pendulum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LocomotionState {
    #[default]
    Grounded,
    Swinging,
    Jumping,
}

/// The character's motion mode. Owns the pendulum for the length of one swing.
#[derive(Component, Debug, Clone)]
pub struct Locomotion {
    machine: StateMachine<LocomotionState>,
    pendulum: Option<Pendulum>,
    swing_velocity: Vec3,
}

impl Default for Locomotion {
    fn default() -> Self {
        Self::new(LocomotionState::Grounded)
    }
}

impl Locomotion {
    pub fn new(initial: LocomotionState) -> Self {
        Self {
            machine: StateMachine::new(initial),
            pendulum: None,
            swing_velocity: Vec3::ZERO,
        }
    }

    #[inline]
    pub fn state(&self) -> LocomotionState {
        self.machine.state()
    }

    #[inline]
    pub fn phase(&self) -> StatePhase {
        self.machine.phase()
    }

    #[inline]
    pub fn pendulum(&self) -> Option<&Pendulum> {
        self.pendulum.as_ref()
    }

    /// Velocity of the swing over the last advanced tick.
    #[inline]
    pub fn swing_velocity(&self) -> Vec3 {
        self.swing_velocity
    }

    /// Move to `next`, running the exit handler of the current state.
    ///
    /// A refused exit is logged and leaves the state untouched.
    pub fn transition(
        &mut self,
        next: LocomotionState,
    ) -> Result<LocomotionState, TransitionError<LocomotionState>> {
        let from = self.machine.state();
        let pendulum = &mut self.pendulum;

        let result = self.machine.transition(next, |state| match state {
            LocomotionState::Grounded => Ok(()),
            LocomotionState::Swinging => {
                *pendulum = None;
                Ok(())
            }
            LocomotionState::Jumping => Err(TransitionError::UnhandledExit(state)),
        });

        match &result {
            Ok(_) => debug!("locomotion: {from:?} -> {next:?}"),
            Err(e) => error!("locomotion: transition to {next:?} dropped: {e}"),
        }
        result
    }

    pub(crate) fn step(&mut self) -> Step<LocomotionState> {
        self.machine.step()
    }

    pub(crate) fn begin_swing(&mut self, pendulum: Pendulum) {
        debug_assert_eq!(self.state(), LocomotionState::Swinging);
        self.pendulum = Some(pendulum);
        self.swing_velocity = Vec3::ZERO;
    }

    /// Advance the pendulum and return the character's new position.
    pub(crate) fn advance_swing(&mut self, dt: f32) -> Option<Vec3> {
        let pendulum = self.pendulum.as_mut()?;
        let before = pendulum.position();
        pendulum.update(dt);
        let after = pendulum.position();

        self.swing_velocity = if dt > 0.0 { (after - before) / dt } else { Vec3::ZERO };
        Some(after)
    }
}

pub fn plugin(app: &mut App) {
    app.add_systems(
        FixedUpdate,
        systems::tick_locomotion
            .in_set(GrappleSystems::Locomotion)
            .run_if(in_state(GameState::InGame)),
    );
}
