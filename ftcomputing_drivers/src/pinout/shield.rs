//! Fixed functions of the Arduino Motor Shield Rev3 besides PWM/DIR.
use hal::gpio::PinMode;

use ftcomputing_core::PinId;

use super::header::HEADER;
use super::PinDef;

/// Brake of channel A (M1), D9. Must be low for the motor to run.
pub const BRAKE_A: PinDef = HEADER[9].gpio.with_mode(PinMode::Output);

/// Brake of channel B (M2), D8.
pub const BRAKE_B: PinDef = HEADER[8].gpio.with_mode(PinMode::Output);

/// Header pins driven by the shield itself, unavailable to the interface.
pub const RESERVED: [PinId; 2] = [PinId::new(9), PinId::new(8)];
