//! Speed dependent throttle percentage.
//!
//! A throttle body restricts airflow much more at high engine speeds than
//! at low ones. With the pedal partially pressed, the engine therefore
//! delivers almost full torque at low speeds and releases towards the
//! nominal pedal position as the speed rises. The percentage calculated
//! here describes that effective throttle opening for a single speed.

use crate::math::map;
use crate::smoothstep::reverse_smoothstep;

/// Pedal percentage under which the low speed compensation applies.
pub const LOW_SPEED_CUTOFF: f32 = 40.0;

// Share of the full torque kept at the lowest speeds with the pedal barely
// touched.
const LOW_SPEED_MODIFIER_FLOOR: f32 = 0.1;

/// Calculate the effective throttle percentage at given engine speed.
///
/// `percent` is the nominal pedal position in `0.0..=100.0`, `min_speed`
/// and `max_speed` delimit the whole speed range of the engine. Closed and
/// fully open throttle are returned as they are, regardless of the speed.
/// Otherwise the result lies between `percent` and 100, reaching `percent`
/// at `max_speed`.
///
/// Pedal positions at or below `low_speed_cutoff` are scaled down at low
/// speeds, a cutoff of zero or less disables it.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rpm_based_percentage(
    speed: f32,
    percent: f32,
    min_speed: f32,
    max_speed: f32,
    low_speed_cutoff: f32,
) -> f32 {
    if percent == 100.0 {
        return 100.0;
    } else if percent == 0.0 {
        return 0.0;
    }

    let (lower_edge, higher_edge) = edges(percent, min_speed, max_speed);
    let modifier = low_speed_modifier(percent, low_speed_cutoff);
    let shaped = modifier * reverse_smoothstep(speed, lower_edge, higher_edge);

    map(shaped, 0.0, 1.0, percent, 100.0)
}

fn edges(percent: f32, min_speed: f32, max_speed: f32) -> (f32, f32) {
    let mean_speed = (max_speed - min_speed) / 2.0;
    // The offset makes the curve leave full throttle sooner than a plain
    // linear placement of the edge would.
    let lower_edge = min_speed + percent / 100.0 * max_speed - mean_speed / 3.0;
    let higher_edge = max_speed;
    (lower_edge, higher_edge)
}

fn low_speed_modifier(percent: f32, low_speed_cutoff: f32) -> f32 {
    if low_speed_cutoff <= 0.0 || percent > low_speed_cutoff {
        1.0
    } else {
        (1.0 - LOW_SPEED_MODIFIER_FLOOR) / low_speed_cutoff * percent + LOW_SPEED_MODIFIER_FLOOR
    }
}
