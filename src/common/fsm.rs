//! Two-phase state machine shared by the hook and the character.
//!
//! A transition runs the exit handler of the state being left, swaps the state and arms the
//! `Entering` latch. The next `step()` consumes the latch and reports `Step::Enter` exactly once;
//! every later `step()` reports `Step::Update` until the next transition.
//!
//! ```text
//!   transition(next, on_exit)        step()            step()
//!   ─────────────────────────► Entering ──► Enter(s) ──► Updating ──► Update(s) ...
//! ```
//!
//! Which transitions are legal is not the machine's business. Callers decide that with their
//! own tables and only ask the machine to move.

use std::fmt::Debug;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatePhase {
    #[default]
    Entering,
    Updating,
}

/// What the driver should run for the current tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<S> {
    Enter(S),
    Update(S),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TransitionError<S: Debug> {
    #[error("no exit handler for state {0:?}")]
    UnhandledExit(S),
}

#[derive(Debug, Clone)]
pub struct StateMachine<S> {
    state: S,
    phase: StatePhase,
}

impl<S: Copy + Eq + Debug> StateMachine<S> {
    /// Start in `initial`; its entry runs on the first `step()`.
    pub fn new(initial: S) -> Self {
        Self {
            state: initial,
            phase: StatePhase::Entering,
        }
    }

    #[inline]
    pub fn state(&self) -> S {
        self.state
    }

    #[inline]
    pub fn phase(&self) -> StatePhase {
        self.phase
    }

    /// Leave the current state through `on_exit`, then latch `next` for entry.
    ///
    /// Returns the state that was left. If `on_exit` refuses, nothing changes.
    pub fn transition<F>(&mut self, next: S, on_exit: F) -> Result<S, TransitionError<S>>
    where
        F: FnOnce(S) -> Result<(), TransitionError<S>>,
    {
        let previous = self.state;
        on_exit(previous)?;
        self.state = next;
        self.phase = StatePhase::Entering;
        Ok(previous)
    }

    /// Advance the latch for this tick.
    pub fn step(&mut self) -> Step<S> {
        match self.phase {
            StatePhase::Entering => {
                self.phase = StatePhase::Updating;
                Step::Enter(self.state)
            }
            StatePhase::Updating => Step::Update(self.state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Light {
        Red,
        Green,
        Broken,
    }

    fn exit(state: Light) -> Result<(), TransitionError<Light>> {
        match state {
            Light::Broken => Err(TransitionError::UnhandledExit(state)),
            _ => Ok(()),
        }
    }

    #[test]
    fn new_machine_enters_initial_state_once() {
        let mut fsm = StateMachine::new(Light::Red);
        assert_eq!(fsm.phase(), StatePhase::Entering);
        assert_eq!(fsm.step(), Step::Enter(Light::Red));
        assert_eq!(fsm.step(), Step::Update(Light::Red));
        assert_eq!(fsm.step(), Step::Update(Light::Red));
        assert_eq!(fsm.phase(), StatePhase::Updating);
    }

    #[test]
    fn transition_rearms_the_entry_latch() {
        let mut fsm = StateMachine::new(Light::Red);
        fsm.step();
        fsm.step();

        assert_eq!(fsm.transition(Light::Green, exit), Ok(Light::Red));
        assert_eq!(fsm.state(), Light::Green);
        assert_eq!(fsm.phase(), StatePhase::Entering);
        assert_eq!(fsm.step(), Step::Enter(Light::Green));
        assert_eq!(fsm.step(), Step::Update(Light::Green));
    }

    #[test]
    fn exit_handler_runs_with_the_state_being_left() {
        let mut fsm = StateMachine::new(Light::Red);
        let mut left = None;
        fsm.transition(Light::Green, |s| {
            left = Some(s);
            Ok(())
        })
        .unwrap();
        assert_eq!(left, Some(Light::Red));
    }

    #[test]
    fn refused_exit_keeps_state_and_phase() {
        let mut fsm = StateMachine::new(Light::Broken);
        fsm.step();

        let err = fsm.transition(Light::Green, exit).unwrap_err();
        assert_eq!(err, TransitionError::UnhandledExit(Light::Broken));
        assert_eq!(err.to_string(), "no exit handler for state Broken");
        assert_eq!(fsm.state(), Light::Broken);
        assert_eq!(fsm.phase(), StatePhase::Updating);
    }
}
