use bevy::prelude::*;
use avian3d::prelude::*;
use crate::common::test_utils::run_system_once;
use crate::common::layers::Layer;

#[test]
fn spawns_static_level_on_enter() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_level);

    let statics = world.query::<(&Name, &RigidBody, &super::WorldBlock)>().iter(&world)
        .filter(|(_, rb, _)| matches!(**rb, RigidBody::Static))
        .count();
    assert_eq!(statics, 7);

    let beams = world.query::<&Name>().iter(&world)
        .filter(|n| n.as_str().starts_with("Beam"))
        .count();
    assert_eq!(beams, 4);
}

#[test]
fn level_geometry_accepts_hooks() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_level);

    for layers in world.query::<&CollisionLayers>().iter(&world) {
        assert!(layers.memberships.has_all(Layer::World));
        assert!(layers.filters.has_all(Layer::Hook));
    }
}

#[test]
fn crate_is_a_dynamic_prop() {
    let mut world = World::new();
    run_system_once(&mut world, super::spawn_crate);

    let mut q_crate = world.query_filtered::<(&RigidBody, &CollisionLayers), With<super::Crate>>();
    let (rb, layers) = q_crate.single(&world).unwrap();
    assert!(matches!(rb, RigidBody::Dynamic));
    assert!(layers.memberships.has_all(Layer::Prop));
    assert!(layers.filters.has_all(Layer::Hook));
}
