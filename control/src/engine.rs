//! Owned torque curves of a single engine.

use heapless::Vec;
use throttle_curve::{sample, Error, TorqueMap, MAX_POINTS};

type Series = Vec<f32, MAX_POINTS>;

/// Boundary torque curves of an engine, copied from the caller and
/// validated once.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Engine {
    speeds: Series,
    zero_throttle: Series,
    full_throttle: Series,
}

impl Engine {
    /// # Errors
    ///
    /// Fails under the same conditions as `TorqueMap::try_new`.
    pub fn try_new(
        speeds: &[f32],
        zero_throttle: &[f32],
        full_throttle: &[f32],
    ) -> Result<Self, Error> {
        TorqueMap::try_new(speeds, zero_throttle, full_throttle)?;
        Ok(Self::from_validated(speeds, zero_throttle, full_throttle))
    }

    /// Engine of the bundled sample data.
    #[must_use]
    pub fn sample() -> Self {
        Self::from_validated(
            &sample::SPEEDS,
            &sample::ZERO_THROTTLE,
            &sample::FULL_THROTTLE,
        )
    }

    fn from_validated(speeds: &[f32], zero_throttle: &[f32], full_throttle: &[f32]) -> Self {
        Self {
            speeds: speeds.iter().copied().collect(),
            zero_throttle: zero_throttle.iter().copied().collect(),
            full_throttle: full_throttle.iter().copied().collect(),
        }
    }

    pub fn torque_map(&self) -> TorqueMap<'_> {
        TorqueMap::new_unchecked(&self.speeds, &self.zero_throttle, &self.full_throttle)
    }
}
