use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::plugins::player::{Aim, Player};

use super::components::{GrappleHook, HookLink};
use super::messages::HookCommand;

/// Producer: read mouse buttons, then write a HookCommand message.
///
/// Left fires along the aim, right retracts. This system does **not** touch the hook.
pub fn request_hook_actions(
    buttons: Option<Res<ButtonInput<MouseButton>>>,
    q_player: Query<(&Aim, &HookLink), With<Player>>,
    mut writer: MessageWriter<HookCommand>,
) {
    let Some(buttons) = buttons else { return; };

    let (aim, link) = match q_player.single() {
        Ok(v) => v,
        Err(e) => { debug!("No single Player with a hook: {e:?}"); return; }
    };

    if buttons.just_pressed(MouseButton::Left) {
        writer.write(HookCommand::Fire { hook: link.0, direction: aim.direction() });
    }
    if buttons.just_pressed(MouseButton::Right) {
        writer.write(HookCommand::Retract { hook: link.0 });
    }
}

/// Consumer: apply Fire/Retract to the addressed hook.
///
/// Commands only come from a `HookLink`, so the target must be a hook.
pub fn apply_hook_commands(
    mut reader: MessageReader<HookCommand>,
    mut q_hooks: Query<&mut GrappleHook>,
) {
    for cmd in reader.read() {
        let mut hook = q_hooks
            .get_mut(cmd.hook())
            .expect("HookCommand addressed an entity without a GrappleHook");

        match *cmd {
            HookCommand::Fire { direction, .. } => {
                hook.fire(direction);
            }
            HookCommand::Retract { .. } => {
                hook.retract();
            }
        }
    }
}
