//! Blend zero-throttle and full-throttle torque curves by pedal position.

use crate::error::Error;
use crate::math::map;
use crate::throttle::rpm_based_percentage;
use crate::torque_map::{TorqueCurve, TorqueMap};

/// Calculate the torque curve for given pedal position.
///
/// This is a shortcut validating the series through `TorqueMap::try_new`
/// and blending them with the default low speed cutoff.
///
/// # Errors
///
/// Fails when the series do not form a valid `TorqueMap`.
pub fn percent_throttle(
    percent: f32,
    speeds: &[f32],
    zero_throttle: &[f32],
    full_throttle: &[f32],
) -> Result<TorqueCurve, Error> {
    let map = TorqueMap::try_new(speeds, zero_throttle, full_throttle)?;
    Ok(map.blend(percent))
}

impl TorqueMap<'_> {
    /// Calculate the torque curve for given pedal position.
    ///
    /// The pedal position is in `0.0..=100.0`. At 0 the result equals the
    /// zero-throttle curve exactly, at 100 the full-throttle curve.
    #[must_use]
    pub fn blend(&self, percent: f32) -> TorqueCurve {
        (0..self.points())
            .map(|i| self.blend_sample(percent, i))
            .collect()
    }

    /// Write the torque curve for given pedal position into a buffer.
    ///
    /// # Errors
    ///
    /// Fails when the buffer length does not match the number of samples.
    pub fn blend_into(&self, percent: f32, buffer: &mut [f32]) -> Result<(), Error> {
        if buffer.len() != self.points() {
            return Err(Error::OutputLengthMismatch {
                expected: self.points(),
                actual: buffer.len(),
            });
        }

        for (i, x) in buffer.iter_mut().enumerate() {
            *x = self.blend_sample(percent, i);
        }

        Ok(())
    }

    /// Effective throttle percentage at the speed of the given sample.
    #[must_use]
    pub fn effective_percentage(&self, percent: f32, index: usize) -> f32 {
        rpm_based_percentage(
            self.speeds[index],
            percent,
            self.min_speed(),
            self.max_speed(),
            self.low_speed_cutoff,
        )
    }

    #[allow(clippy::float_cmp)]
    fn blend_sample(&self, percent: f32, index: usize) -> f32 {
        let effective = self.effective_percentage(percent, index);
        if effective == 100.0 {
            return self.full_throttle[index];
        } else if effective == 0.0 {
            return self.zero_throttle[index];
        }
        map(
            effective,
            0.0,
            100.0,
            self.zero_throttle[index],
            self.full_throttle[index],
        )
    }
}
