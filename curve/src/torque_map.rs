//! Boundary torque curves sharing a common engine speed series.

use core::cmp::Ordering;

use heapless::Vec;

use crate::error::Error;
use crate::log;
use crate::throttle::LOW_SPEED_CUTOFF;

/// The maximum number of samples a single series may hold.
pub const MAX_POINTS: usize = 128;

/// Torque values aligned with engine speed series of a `TorqueMap`.
pub type TorqueCurve = Vec<f32, MAX_POINTS>;

/// Validated view over zero-throttle and full-throttle torque curves.
///
/// All three series are sampled at the same engine speeds, the speeds are
/// strictly increasing and there are at least two of them. The map only
/// borrows the series, they are never modified.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TorqueMap<'a> {
    pub(crate) speeds: &'a [f32],
    pub(crate) zero_throttle: &'a [f32],
    pub(crate) full_throttle: &'a [f32],
    pub(crate) low_speed_cutoff: f32,
}

impl<'a> TorqueMap<'a> {
    /// # Errors
    ///
    /// Fails when the series differ in length, hold less than two or more
    /// than `MAX_POINTS` samples, or when the speeds are not strictly
    /// increasing.
    pub fn try_new(
        speeds: &'a [f32],
        zero_throttle: &'a [f32],
        full_throttle: &'a [f32],
    ) -> Result<Self, Error> {
        if let Err(error) = validate(speeds, zero_throttle, full_throttle) {
            log::warning!("Rejecting torque map: {:?}", error);
            return Err(error);
        }
        Ok(Self::new_unchecked(speeds, zero_throttle, full_throttle))
    }

    /// Build the map over series that are already known to be valid.
    ///
    /// Use this for data validated earlier through `try_new`. Invalid series
    /// are only caught by a debug assertion.
    ///
    /// # Panics
    ///
    /// Blending panics when the series differ in length, or when they hold
    /// more than `MAX_POINTS` samples and the result does not fit into
    /// `TorqueCurve`.
    #[must_use]
    pub fn new_unchecked(
        speeds: &'a [f32],
        zero_throttle: &'a [f32],
        full_throttle: &'a [f32],
    ) -> Self {
        debug_assert!(validate(speeds, zero_throttle, full_throttle).is_ok());
        Self {
            speeds,
            zero_throttle,
            full_throttle,
            low_speed_cutoff: LOW_SPEED_CUTOFF,
        }
    }

    /// Tune the pedal percentage under which low speed torque gets scaled
    /// down. Zero disables the compensation.
    #[must_use]
    pub fn with_low_speed_cutoff(mut self, low_speed_cutoff: f32) -> Self {
        self.low_speed_cutoff = low_speed_cutoff;
        self
    }

    pub fn speeds(&self) -> &'a [f32] {
        self.speeds
    }

    pub fn zero_throttle(&self) -> &'a [f32] {
        self.zero_throttle
    }

    pub fn full_throttle(&self) -> &'a [f32] {
        self.full_throttle
    }

    pub fn low_speed_cutoff(&self) -> f32 {
        self.low_speed_cutoff
    }

    /// Number of samples in each of the series.
    pub fn points(&self) -> usize {
        self.speeds.len()
    }

    pub fn min_speed(&self) -> f32 {
        self.speeds[0]
    }

    pub fn max_speed(&self) -> f32 {
        self.speeds[self.speeds.len() - 1]
    }
}

fn validate(speeds: &[f32], zero_throttle: &[f32], full_throttle: &[f32]) -> Result<(), Error> {
    let len = speeds.len();

    if zero_throttle.len() != len || full_throttle.len() != len {
        return Err(Error::LengthMismatch {
            speeds: len,
            zero_throttle: zero_throttle.len(),
            full_throttle: full_throttle.len(),
        });
    }

    if len < 2 {
        return Err(Error::TooFewPoints { len });
    }

    if len > MAX_POINTS {
        return Err(Error::TooManyPoints {
            len,
            capacity: MAX_POINTS,
        });
    }

    // Comparison with NaN yields None and is rejected too.
    if let Some(i) = speeds
        .windows(2)
        .position(|pair| pair[1].partial_cmp(&pair[0]) != Some(Ordering::Greater))
    {
        return Err(Error::SpeedsNotIncreasing { index: i + 1 });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEEDS: [f32; 4] = [1000.0, 3000.0, 5000.0, 7000.0];
    const ZERO: [f32; 4] = [-10.0, -15.0, -20.0, -25.0];
    const FULL: [f32; 4] = [100.0, 150.0, 160.0, 120.0];

    #[test]
    fn given_valid_series_it_exposes_them() {
        let map = TorqueMap::try_new(&SPEEDS, &ZERO, &FULL).expect("Valid map rejected");
        assert_eq!(map.points(), 4);
        assert_relative_eq!(map.min_speed(), 1000.0);
        assert_relative_eq!(map.max_speed(), 7000.0);
        assert_eq!(map.speeds(), &SPEEDS[..]);
        assert_eq!(map.zero_throttle(), &ZERO[..]);
        assert_eq!(map.full_throttle(), &FULL[..]);
    }

    #[test]
    fn when_created_it_uses_default_low_speed_cutoff() {
        let map = TorqueMap::try_new(&SPEEDS, &ZERO, &FULL).unwrap();
        assert_relative_eq!(map.low_speed_cutoff(), LOW_SPEED_CUTOFF);
        let map = map.with_low_speed_cutoff(0.0);
        assert_relative_eq!(map.low_speed_cutoff(), 0.0);
    }

    #[test]
    fn given_series_of_different_length_it_fails() {
        assert_eq!(
            TorqueMap::try_new(&SPEEDS, &ZERO[..3], &FULL),
            Err(Error::LengthMismatch {
                speeds: 4,
                zero_throttle: 3,
                full_throttle: 4
            })
        );
        assert_eq!(
            TorqueMap::try_new(&SPEEDS, &ZERO, &FULL[1..]),
            Err(Error::LengthMismatch {
                speeds: 4,
                zero_throttle: 4,
                full_throttle: 3
            })
        );
    }

    #[test]
    fn given_single_sample_it_fails() {
        assert_eq!(
            TorqueMap::try_new(&SPEEDS[..1], &ZERO[..1], &FULL[..1]),
            Err(Error::TooFewPoints { len: 1 })
        );
    }

    #[test]
    fn given_empty_series_it_fails() {
        assert_eq!(
            TorqueMap::try_new(&[], &[], &[]),
            Err(Error::TooFewPoints { len: 0 })
        );
    }

    #[test]
    fn given_too_many_samples_it_fails() {
        let mut speeds = [0.0; MAX_POINTS + 1];
        for (i, speed) in speeds.iter_mut().enumerate() {
            *speed = i as f32 * 100.0;
        }
        let torque = [0.0; MAX_POINTS + 1];
        assert_eq!(
            TorqueMap::try_new(&speeds, &torque, &torque),
            Err(Error::TooManyPoints {
                len: MAX_POINTS + 1,
                capacity: MAX_POINTS
            })
        );
    }

    #[test]
    #[should_panic]
    fn given_too_many_unchecked_samples_blending_panics() {
        let mut speeds = [0.0; MAX_POINTS + 1];
        for (i, speed) in speeds.iter_mut().enumerate() {
            *speed = i as f32 * 100.0;
        }
        let torque = [0.0; MAX_POINTS + 1];
        let _ = TorqueMap::new_unchecked(&speeds, &torque, &torque).blend(50.0);
    }

    #[test]
    #[should_panic]
    fn given_unchecked_series_of_different_lengths_blending_panics() {
        let _ = TorqueMap::new_unchecked(&SPEEDS, &ZERO, &FULL[..2]).blend(50.0);
    }

    #[test]
    fn given_repeated_speed_it_fails() {
        let speeds = [1000.0, 3000.0, 3000.0, 7000.0];
        assert_eq!(
            TorqueMap::try_new(&speeds, &ZERO, &FULL),
            Err(Error::SpeedsNotIncreasing { index: 2 })
        );
    }

    #[test]
    fn given_decreasing_speed_it_fails() {
        let speeds = [1000.0, 3000.0, 5000.0, 4000.0];
        assert_eq!(
            TorqueMap::try_new(&speeds, &ZERO, &FULL),
            Err(Error::SpeedsNotIncreasing { index: 3 })
        );
    }

    #[test]
    fn given_degenerate_speed_range_it_fails() {
        assert_eq!(
            TorqueMap::try_new(&[500.0, 500.0], &[0.0, 0.0], &[1.0, 1.0]),
            Err(Error::SpeedsNotIncreasing { index: 1 })
        );
    }

    #[test]
    fn given_nan_speed_it_fails() {
        let speeds = [1000.0, f32::NAN, 5000.0, 7000.0];
        assert_eq!(
            TorqueMap::try_new(&speeds, &ZERO, &FULL),
            Err(Error::SpeedsNotIncreasing { index: 1 })
        );
    }
}
