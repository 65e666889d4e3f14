//! Differential-drive integration.
//!
//! The wheel base is the body diameter. Heading grows with `right - left`:
//! a faster wheel swings the body toward that wheel's sensor side (the right
//! sensor sits at +40°, clockwise on screen).

use glam::DVec2;

use braitenberg_core::types::{Pose, WheelVelocity};

/// Heading change in degrees for one step of `dt`.
pub fn turn_degrees(radius: f64, dt: f64, velocity: WheelVelocity) -> f64 {
    let wheel_base = 2.0 * radius;
    if wheel_base <= 0.0 {
        return 0.0;
    }
    ((velocity.right - velocity.left) / wheel_base * dt).to_degrees()
}

/// Integrate one step: turn first, then move along the new heading.
pub fn update_pose(pose: &Pose, radius: f64, dt: f64, velocity: WheelVelocity) -> Pose {
    let mut next = *pose;
    next.rotate(turn_degrees(radius, dt, velocity));

    let direction = DVec2::from_angle(next.heading_radians());
    next.set_position(pose.position() + direction * velocity.linear() * dt);
    next
}
