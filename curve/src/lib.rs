//! Throttle response interpolation between boundary torque curves.
//!
//! An engine is described by two torque curves sampled over the same engine
//! speeds: torque with a fully closed throttle (engine braking) and with a
//! fully open one. Any pedal position in between is approximated by
//! blending both curves with a speed dependent weight. At low speeds even a
//! partially open throttle lets through enough air for almost full torque,
//! at high speeds the response falls back towards the pedal position.
//!
//! ```text
//!   [ speeds ]  [ zero throttle ]  [ full throttle ]
//!        \              |              /
//!         +------> ( TorqueMap ) <----+
//!                        |
//!   (pedal %) ---> ( blend ) ---> [ blended torque ]
//! ```
//!
//! Nothing here allocates on the heap. Curves are returned in fixed
//! capacity vectors or written into caller provided buffers.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod blender;
mod error;
pub mod family;
mod log;
pub mod math;
pub mod sample;
pub mod smoothstep;
pub mod throttle;
pub mod torque_map;

pub use blender::percent_throttle;
pub use error::Error;
pub use family::{Family, CHART_STEP};
pub use throttle::{rpm_based_percentage, LOW_SPEED_CUTOFF};
pub use torque_map::{TorqueCurve, TorqueMap, MAX_POINTS};
