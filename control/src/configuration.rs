use throttle_curve::{CHART_STEP, LOW_SPEED_CUTOFF};

/// Tweaking of the throttle response and its presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Configuration {
    /// Pedal percentage under which low speed torque gets scaled down.
    /// Zero disables the compensation.
    pub low_speed_cutoff: f32,
    /// Granularity of the pedal percentage. Curves are blended again only
    /// once the pedal crosses to another step.
    pub pedal_step: f32,
    /// Pedal step between curves of the static chart.
    pub chart_step: f32,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            low_speed_cutoff: LOW_SPEED_CUTOFF,
            pedal_step: 1.0,
            chart_step: CHART_STEP,
        }
    }
}
