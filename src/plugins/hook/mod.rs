//! Grappling hook plugin: projectile lifecycle driven by an explicit state machine.
//!
//! # Lifecycle
//! ```text
//!            Fire                 hit
//!   Docked ────────► Launching ─────────► Hooked
//!     ▲                  │                  │
//!     │ arrived          │ Retract          │ Retract
//!     │                  ▼                  │
//!     └─────────────  Retracting ◄──────────┘
//! ```
//! Every other (state, trigger) pair is a silent no-op. The table lives in [`state`] as a pure
//! function, together with the list of entry actions per state.
//!
//! # Data flow
//! ```text
//!   Update (variable dt)
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (A) Producer: request_hook_actions                                        │
//!│      - reads: MouseButton input, Player Aim + HookLink                     │
//!│      - writes: HookCommand message                                         │
//!│                                                                            │
//!│  (B) Consumer: apply_hook_commands                                         │
//!│      - mutates: GrappleHook machine (Fire / Retract)                       │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedUpdate (fixed dt), chained
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (C) GrappleSystems::Hook: tick_hooks                                      │
//!│      - entry actions once after a transition, per-state body otherwise     │
//!│      - mutates: Transform, LinearVelocity, MaxLinearSpeed,                 │
//!│                 CollisionLayers, HookAnchor                                │
//!│                                                                            │
//!│  (D) GrappleSystems::Locomotion (see `locomotion`)                         │
//!│                                                                            │
//!│  (E) GrappleSystems::Rope: update_rope_visuals                             │
//!└────────────────────────────────────────────────────────────────────────────┘
//!                │
//!                v
//!   FixedPostUpdate
//!┌────────────────────────────────────────────────────────────────────────────┐
//!│  (F) Physics emits CollisionStart messages (Avian)                         │
//!│                                                                            │
//!│  (G) process_hook_collisions                                               │
//!│      - validates the other side, Launching -> Hooked                       │
//!│      - writes: HookImpulse for dynamic targets                             │
//!│                                                                            │
//!│  (H) apply_hook_impulses                                                   │
//!└────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A hit resolved in (G) during fixed tick N is seen by locomotion in tick N+1.
//!
//! # Ownership
//! `HookAnchor` can only be moved by this module. Locomotion and the rope read it.

pub mod collision;
pub mod components;
pub mod messages;
pub mod request;
pub mod rope;
pub mod state;
pub mod systems;

use avian3d::collision::narrow_phase::CollisionEventSystems;
use bevy::ecs::message::Messages;
use bevy::prelude::*;

use crate::common::state::GameState;

pub use components::{GrappleHook, HookAnchor, HookHit, HookLink, RopeVisual};
pub use state::HookState;

/// Fixed-step ordering shared by the hook and the character.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GrappleSystems {
    Hook,
    Locomotion,
    Rope,
}

pub struct HookPlugin;

/// Maintain hook message buffers.
///
/// Messages are double-buffered; `update()` advances buffers.
fn update_hook_messages(
    mut commands: ResMut<Messages<messages::HookCommand>>,
    mut impulses: ResMut<Messages<messages::HookImpulse>>,
) {
    commands.update();
    impulses.update();
}

impl Plugin for HookPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Messages<messages::HookCommand>>()
            .init_resource::<Messages<messages::HookImpulse>>()
            .add_systems(PostUpdate, update_hook_messages);

        app.configure_sets(
            FixedUpdate,
            (
                GrappleSystems::Hook,
                GrappleSystems::Locomotion,
                GrappleSystems::Rope,
            )
                .chain(),
        );

        // Update-phase pipeline: input -> command -> machine
        app.add_systems(
            Update,
            (
                request::request_hook_actions,
                request::apply_hook_commands.after(request::request_hook_actions),
            )
                .run_if(in_state(GameState::InGame)),
        );

        app.add_systems(
            FixedUpdate,
            (
                systems::tick_hooks.in_set(GrappleSystems::Hook),
                rope::update_rope_visuals.in_set(GrappleSystems::Rope),
            )
                .run_if(in_state(GameState::InGame)),
        );

        // Fixed collision pipeline
        app.add_systems(
            FixedPostUpdate,
            (
                collision::process_hook_collisions.after(CollisionEventSystems),
                collision::apply_hook_impulses.after(collision::process_hook_collisions),
            )
                .run_if(in_state(GameState::InGame)),
        );
    }
}
