//! The main store turning pedal input into torque curves.
//!
//! It is meant to sit between the source of pedal movement and whatever
//! renders the resulting curve. Every control action may produce a
//! reaction carrying the newly blended curve. Reactions are only emitted
//! when the curve changed, so the renderer redraws once per change.

use throttle_curve::{Family, TorqueCurve, TorqueMap};

use crate::configuration::Configuration;
use crate::engine::Engine;
use crate::log;
use crate::pedal::Pedal;

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlAction {
    /// Raw pedal reading in `0.0..=1.0`.
    SetPedal(f32),
    SetLowSpeedCutoff(f32),
}

/// Torque curve blended for the current pedal percentage.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Reaction {
    pub percent: f32,
    pub torque: TorqueCurve,
}

/// State of the interactive throttle response.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    engine: Engine,
    configuration: Configuration,
    pedal: Pedal,
    cache: Cache,
}

/// What was last passed on to the renderer.
#[derive(Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Cache {
    percent: Option<f32>,
}

impl Store {
    #[must_use]
    pub fn new(engine: Engine, configuration: Configuration) -> Self {
        Self {
            engine,
            configuration,
            pedal: Pedal::default(),
            cache: Cache::default(),
        }
    }

    pub fn apply_control_action(&mut self, action: ControlAction) -> Option<Reaction> {
        match action {
            ControlAction::SetPedal(value) => {
                self.pedal.update(value);
            }
            ControlAction::SetLowSpeedCutoff(low_speed_cutoff) => {
                log::info!("Setting low speed cutoff={:?}", low_speed_cutoff);
                self.configuration.low_speed_cutoff = low_speed_cutoff;
                self.cache.percent = None;
            }
        }

        let percent = self.percent();
        if self.cache.percent == Some(percent) {
            return None;
        }

        log::info!("Blending torque for pedal={:?}", percent);
        self.cache.percent = Some(percent);
        Some(self.reaction())
    }

    /// Torque curve of the current pedal percentage.
    #[must_use]
    pub fn reaction(&self) -> Reaction {
        let percent = self.percent();
        Reaction {
            percent,
            torque: self.torque_map().blend(percent),
        }
    }

    /// Curves covering the pedal travel in steps of the configured chart
    /// step.
    pub fn chart(&self) -> Family<'_> {
        self.torque_map().family(self.configuration.chart_step)
    }

    pub fn torque_map(&self) -> TorqueMap<'_> {
        self.engine
            .torque_map()
            .with_low_speed_cutoff(self.configuration.low_speed_cutoff)
    }

    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    pub fn pedal(&self) -> &Pedal {
        &self.pedal
    }

    fn percent(&self) -> f32 {
        self.pedal.percent(self.configuration.pedal_step)
    }
}
