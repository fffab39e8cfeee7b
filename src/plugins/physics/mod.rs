use avian3d::prelude::*;
use bevy::prelude::*;

use crate::common::tunables::Tunables;

pub fn plugin(app: &mut App) {
    let tunables = app.world().resource::<Tunables>().clone();
    app.add_plugins(PhysicsPlugins::default().with_length_unit(tunables.length_unit));
    app.insert_resource(Gravity(Vec3::NEG_Z * tunables.gravity));
}
