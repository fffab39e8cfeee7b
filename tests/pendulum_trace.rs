use bevy::math::{Vec2, Vec3};

use grapple_swing::plugins::locomotion::pendulum::{Pendulum, PendulumStep};

fn reference(step: PendulumStep) -> Pendulum {
    Pendulum::new(Vec3::ZERO, 500.0, -980.0)
        .with_angle(0.3)
        .with_angular_velocity(0.0)
        .with_plane(Vec2::new(1.0, 0.0))
        .with_step(step)
}

#[test]
fn reference_motion_after_one_update() {
    let mut p = reference(PendulumStep::PerTick);
    p.update(1.0 / 60.0);

    assert!((p.angular_acceleration() + 0.579).abs() < 1e-3);
    assert!((p.angular_velocity() + 0.579).abs() < 1e-3);
    assert!((p.angle() + 0.279).abs() < 1e-3);
    assert!((p.position().z + 480.4).abs() < 0.5);
}

#[test]
fn step_modes_agree_at_unit_dt() {
    let mut per_tick = reference(PendulumStep::PerTick);
    let mut semi = reference(PendulumStep::SemiImplicit);

    for _ in 0..3 {
        per_tick.update(1.0);
        semi.update(1.0);
    }

    assert_eq!(per_tick.angle(), semi.angle());
    assert_eq!(per_tick.position(), semi.position());
}

#[test]
fn small_swing_has_the_textbook_period() {
    let (r, g) = (500.0_f32, 980.0_f32);
    let dt = 1.0 / 600.0;
    let mut p = Pendulum::new(Vec3::ZERO, r, -g).with_angle(0.05);

    // First zero crossing is a quarter period.
    let mut t = 0.0;
    while p.angle() > 0.0 {
        p.update(dt);
        t += dt;
        assert!(t < 10.0);
    }

    let quarter = std::f32::consts::FRAC_PI_2 * (r / g).sqrt();
    assert!((t - quarter).abs() / quarter < 0.02, "t = {t}, expected {quarter}");
}
