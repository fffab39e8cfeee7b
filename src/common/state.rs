//! Top-level app state.
//!
//! Level, player and hook entities are scoped to `InGame` and every gameplay system is gated on
//! it, so leaving the state tears the whole grapple rig down.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, States, Default)]
pub enum GameState {
    #[default]
    InGame,
}
