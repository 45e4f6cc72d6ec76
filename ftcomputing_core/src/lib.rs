//! fischertechnik "Computing" interface semantics for an Arduino style motor shield.
//!
//! Application code talks about `motor1().right()` or `e3().is_depressed()`,
//! this crate translates that into calls on a [`Platform`] implementation
//! provided by the board support crate.
#![cfg_attr(not(any(test, feature = "std")), no_std)]

#[macro_use]
mod fmt;

pub mod actuator;
pub mod assembly;
pub mod config;
pub mod derating;
pub mod error;
pub mod pin;
pub mod platform;
pub mod sensor;

#[cfg(test)]
pub(crate) mod testing;

pub use actuator::{ActuatorChannel, Direction};
pub use assembly::{Analog, AnalogId, DeviceAssembly, Input, InputId, InputSnapshot, Motor, MotorId};
pub use config::{AssemblyConfig, InputPins, MotorPins};
pub use error::ConfigError;
pub use pin::PinId;
pub use platform::{Level, PinMode, Platform};
pub use sensor::{AnalogSensor, DigitalSensor, Polarity};
