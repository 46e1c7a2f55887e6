//! Interactive layer passing pedal input to the throttle interpolation.
//!
//! It takes raw readings of a pedal, smoothens and quantizes them and
//! reacts with the torque curve blended for the resulting pedal
//! percentage. Rendering of the curves is left to the caller.
//!
//! ```text
//!     [ Pedal ]                         [ Renderer ]
//!         |                                  A
//!         | (ControlAction)       (Reaction) |
//!         V                                  |
//!    [ Store {Pedal, Configuration, Cache} ]-+
//!                      |
//!                      V
//!          {Engine} -> TorqueMap::blend
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod configuration;
pub mod engine;
mod log;
pub mod pedal;
pub mod store;

pub use configuration::Configuration;
pub use engine::Engine;
pub use pedal::Pedal;
pub use store::{ControlAction, Reaction, Store};
