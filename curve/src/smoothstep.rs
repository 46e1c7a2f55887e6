//! Smooth transition from one to zero.

/// Cubic Hermite smoothstep mirrored to go from 1 at `lower_edge` down to 0
/// at `higher_edge`.
///
/// Values below the lower edge return 1, values above the higher edge
/// return 0. The slope is zero at both edges.
///
/// When both edges meet, the transition collapses into a hard step at the
/// shared edge.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn reverse_smoothstep(x: f32, lower_edge: f32, higher_edge: f32) -> f32 {
    let width = higher_edge - lower_edge;

    if width == 0.0 {
        return if x < lower_edge { 1.0 } else { 0.0 };
    }

    let t = (x - lower_edge) / width;
    if t < 0.0 {
        1.0
    } else if t > 1.0 {
        0.0
    } else {
        let u = 1.0 - t;
        // 3u^2 - 2u^3, factored to stay within 0..=1 after rounding.
        u * u * (3.0 - 2.0 * u)
    }
}
