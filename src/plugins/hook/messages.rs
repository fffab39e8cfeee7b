//! Buffered hook messages.
//!
//! Producers create *intent*; consumers apply it:
//! - input → `HookCommand` → hook machine
//! - hook collision → `HookImpulse` → struck body

use bevy::prelude::*;

#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub enum HookCommand {
    Fire { hook: Entity, direction: Vec3 },
    Retract { hook: Entity },
}

impl HookCommand {
    #[inline]
    pub fn hook(&self) -> Entity {
        match *self {
            Self::Fire { hook, .. } | Self::Retract { hook } => hook,
        }
    }
}

/// Impulse for a dynamic body the hook struck.
#[derive(Message, Clone, Copy, Debug, PartialEq)]
pub struct HookImpulse {
    pub target: Entity,
    pub direction: Vec3,
    pub magnitude: f32,
    pub point: Vec3,
}
