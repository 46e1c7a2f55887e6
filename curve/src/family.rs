//! A set of torque curves covering the pedal travel in even steps.
//!
//! This is what a static chart of the throttle response would draw, the
//! boundary curves in addition to one blended curve per pedal step.

use crate::torque_map::{TorqueCurve, TorqueMap};

/// Pedal step between curves of a chart.
pub const CHART_STEP: f32 = 10.0;

/// Iterator over blended curves at `step`, `2 * step`, ... percent of the
/// pedal, stopping short of 100.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Family<'a> {
    map: TorqueMap<'a>,
    step: f32,
    index: Option<u32>,
}

impl<'a> TorqueMap<'a> {
    /// Blend curves for evenly spaced pedal positions.
    ///
    /// A step that is not a positive finite number yields no curves.
    #[must_use]
    pub fn family(&self, step: f32) -> Family<'a> {
        Family {
            map: *self,
            step,
            index: Some(1),
        }
    }
}

impl Iterator for Family<'_> {
    type Item = (f32, TorqueCurve);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.step.is_finite() || self.step <= 0.0 {
            return None;
        }

        let index = self.index?;
        let percent = self.step * index as f32;
        if percent >= 100.0 {
            return None;
        }

        // Exhausted once the counter runs out, even if a tiny step never
        // reaches 100.
        self.index = index.checked_add(1);
        Some((percent, self.map.blend(percent)))
    }
}
