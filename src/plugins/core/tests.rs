use bevy::prelude::*;
use crate::plugins::core;
use crate::common::tunables::{HitFilter, Tunables};
use crate::plugins::locomotion::pendulum::PendulumStep;

#[test]
fn inserts_resources() {
    let mut app = App::new();
    core::plugin(&mut app);
    assert!(app.world().get_resource::<Tunables>().is_some());
    assert!(app.world().get_resource::<ClearColor>().is_some());
}

#[test]
fn default_tunables_match_the_hook_feel() {
    let t = Tunables::default();
    assert_eq!(t.hook_launch_speed, 3000.0);
    assert_eq!(t.gravity, 980.0);
    assert_eq!(t.jump_speed, 600.0);
    assert_eq!(t.muzzle_offset, Vec3::new(100.0, 0.0, 10.0));
    assert_eq!(t.hit_filter, HitFilter::AnySurface);
    assert_eq!(t.pendulum_step, PendulumStep::SemiImplicit);
    assert_eq!(t.dock_threshold_sq(), t.dock_threshold * t.dock_threshold);
}
