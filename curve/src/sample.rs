//! Engine data to experiment with.
//!
//! The full-throttle curve comes from the power table of the RSS P91
//! Protech, sampled every 600 rpm. Its zero-throttle curve is a simple
//! linear engine-braking approximation.

use crate::math::map;
use crate::torque_map::TorqueMap;

pub const SPEEDS: [f32; 16] = [
    0.0, 600.0, 1200.0, 1800.0, 2400.0, 3000.0, 3600.0, 4200.0, 4800.0, 5400.0, 6000.0, 6600.0,
    7200.0, 7800.0, 8400.0, 9000.0,
];

pub const FULL_THROTTLE: [f32; 16] = [
    76.220_19,
    85.220_19,
    97.274_67,
    105.332_65,
    117.189_82,
    131.892_93,
    143.735_96,
    155.676_39,
    167.991_6,
    179.579,
    189.137_43,
    194.121_32,
    191.553_88,
    184.036_95,
    169.492_48,
    148.561_87,
];

/// Engine braking at the lowest and the highest speed.
pub const ENGINE_BRAKING: (f32, f32) = (-10.0, -40.0);

pub const ZERO_THROTTLE: [f32; 16] = [
    -10.0, -12.0, -14.0, -16.0, -18.0, -20.0, -22.0, -24.0, -26.0, -28.0, -30.0, -32.0, -34.0,
    -36.0, -38.0, -40.0,
];

/// Torque map over the sample data.
#[must_use]
pub fn torque_map() -> TorqueMap<'static> {
    TorqueMap::new_unchecked(&SPEEDS, &ZERO_THROTTLE, &FULL_THROTTLE)
}

/// Approximate engine braking by a line going from `at_min_speed` torque at
/// the first speed to `at_max_speed` torque at the last one.
///
/// Speeds must be increasing and there must be at least two of them.
#[must_use]
pub fn linear_engine_braking<const N: usize>(
    speeds: &[f32; N],
    at_min_speed: f32,
    at_max_speed: f32,
) -> [f32; N] {
    let mut torque = [0.0; N];
    if let (Some(&min_speed), Some(&max_speed)) = (speeds.first(), speeds.last()) {
        for (x, speed) in torque.iter_mut().zip(speeds) {
            *x = map(*speed, min_speed, max_speed, at_min_speed, at_max_speed);
        }
    }
    torque
}
