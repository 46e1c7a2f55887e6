//! Pedal abstraction tracking its position over time.

#[allow(unused_imports)]
use micromath::F32Ext;

// Number of recent readings the position is averaged over.
const WINDOW: usize = 8;

// Readings closer than this to either end of the travel snap to it.
const SNAP: f32 = 0.005;

// Changes of the smoothened position below this are considered noise.
const NOISE: f32 = 0.002;

// Travel over the averaging window above this means the pedal is moving.
const MOVEMENT: f32 = 0.01;

/// Abstraction of a throttle pedal.
///
/// Use it to smoothen raw readings in `0.0..=1.0` received from the pedal
/// and to turn them into a pedal percentage. Positions close to the ends
/// of the travel snap to exactly released or fully pressed, so both
/// boundary torque curves are reachable with a noisy sensor.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pedal {
    readings: [f32; WINDOW],
    newest: usize,
    position: f32,
}

impl Pedal {
    pub fn update(&mut self, value: f32) {
        if value.is_nan() {
            return;
        }

        self.newest = (self.newest + 1) % WINDOW;
        self.readings[self.newest] = value.clamp(0.0, 1.0);

        let value = self.average();
        if value < SNAP {
            self.position = 0.0;
        } else if value > 1.0 - SNAP {
            self.position = 1.0;
        } else if (self.position - value).abs() > NOISE {
            self.position = value;
        }
    }

    /// Smoothened position in `0.0..=1.0`.
    pub fn position(&self) -> f32 {
        self.position
    }

    /// Position in percent, rounded to the closest multiple of `step`.
    ///
    /// A step that is not a positive finite number disables the rounding.
    pub fn percent(&self, step: f32) -> f32 {
        quantize(self.position * 100.0, step)
    }

    pub fn is_moving(&self) -> bool {
        self.traveled().abs() > MOVEMENT
    }

    // Readings not received yet count as a released pedal.
    fn average(&self) -> f32 {
        self.readings.iter().sum::<f32>() / WINDOW as f32
    }

    // Distance between the oldest and the newest reading in the window.
    fn traveled(&self) -> f32 {
        let oldest = (self.newest + 1) % WINDOW;
        self.readings[self.newest] - self.readings[oldest]
    }
}

fn quantize(percent: f32, step: f32) -> f32 {
    if step.is_finite() && step > 0.0 {
        ((percent / step).round() * step).clamp(0.0, 100.0)
    } else {
        percent
    }
}
