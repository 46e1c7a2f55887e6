/// Linearly remap `x` from range `a..b` onto range `c..d`.
///
/// Values outside of `a..b` are extrapolated, not clamped. The source range
/// must not be empty, `a == b` results in a non-finite value.
#[must_use]
pub fn map(x: f32, a: f32, b: f32, c: f32, d: f32) -> f32 {
    (x - a) / (b - a) * (d - c) + c
}
