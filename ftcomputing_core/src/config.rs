//! Wiring description of a [`crate::DeviceAssembly`].
//!
//! Every role of the interface has its own entry; `Default` is the standard
//! wiring of an Arduino Motor Shield on Uno-compatible headers with the kit
//! motors fed from 12V.

use crate::assembly::{AnalogId, InputId, MotorId};
use crate::derating::KIT_NOMINAL_MV;
use crate::error::ConfigError;
use crate::pin::PinId;
use crate::sensor::Polarity;

/// Number of motor outputs (M1..M3).
pub const MOTOR_COUNT: usize = 3;
/// Number of digital inputs (E0..E7).
pub const INPUT_COUNT: usize = 8;
/// Number of analog inputs (EX, EY).
pub const ANALOG_COUNT: usize = 2;

/// First analog header pin, A0 follows D13.
pub const A0: u8 = 14;

/// Default supply voltage of the shield in millivolts.
pub const DEFAULT_SUPPLY_MV: u32 = 12000;

/// Pins of one motor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MotorPins {
    pub pwm: PinId,
    pub direction: Option<PinId>,
}

impl MotorPins {
    pub const fn new(pwm: u8, direction: Option<u8>) -> Self {
        MotorPins {
            pwm: PinId::new(pwm),
            direction: match direction {
                Some(d) => Some(PinId::new(d)),
                None => None,
            },
        }
    }
}

/// Pin and polarity of one digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputPins {
    pub pin: Option<PinId>,
    pub polarity: Polarity,
}

impl InputPins {
    /// Input on `pin`, active-low.
    pub const fn wired(pin: u8) -> Self {
        InputPins {
            pin: Some(PinId::new(pin)),
            polarity: Polarity::ActiveLow,
        }
    }

    /// Input that is not wired.
    pub const fn unassigned() -> Self {
        InputPins {
            pin: None,
            polarity: Polarity::ActiveLow,
        }
    }
}

/// Complete external configuration of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssemblyConfig {
    /// Voltage feeding the motor driver [mV]
    pub supply_mv: u32,
    /// Voltage the motors are rated for [mV]
    pub nominal_mv: u32,
    /// M1, M2, M3
    pub motors: [MotorPins; MOTOR_COUNT],
    /// E0..E7
    pub inputs: [InputPins; INPUT_COUNT],
    /// EX, EY
    pub analog: [PinId; ANALOG_COUNT],
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        AssemblyConfig {
            supply_mv: DEFAULT_SUPPLY_MV,
            nominal_mv: KIT_NOMINAL_MV,
            motors: [
                MotorPins::new(3, Some(12)),  // M1, shield channel A
                MotorPins::new(11, Some(13)), // M2, shield channel B
                MotorPins::new(10, None),     // M3, unidirectional
            ],
            inputs: [
                InputPins::wired(2), // E0
                InputPins::unassigned(),
                InputPins::unassigned(),
                InputPins::wired(6), // E3
                InputPins::wired(4), // E4
                InputPins::wired(5), // E5
                InputPins::unassigned(),
                InputPins::unassigned(),
            ],
            analog: [PinId::new(A0 + 2), PinId::new(A0 + 3)], // A2, A3
        }
    }
}

impl AssemblyConfig {
    pub fn with_supply_mv(mut self, supply_mv: u32) -> Self {
        self.supply_mv = supply_mv;
        self
    }

    pub fn with_nominal_mv(mut self, nominal_mv: u32) -> Self {
        self.nominal_mv = nominal_mv;
        self
    }

    pub fn with_motor(mut self, id: MotorId, pins: MotorPins) -> Self {
        self.motors[id as usize] = pins;
        self
    }

    /// Rewires an input, E8 rewires E0.
    pub fn with_input(mut self, id: InputId, pins: InputPins) -> Self {
        self.inputs[id.index()] = pins;
        self
    }

    pub fn with_analog(mut self, id: AnalogId, pin: PinId) -> Self {
        self.analog[id as usize] = pin;
        self
    }

    /// Checks voltages and that no physical pin serves two roles.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with(&[])
    }

    /// Like [`AssemblyConfig::validate`], additionally refusing every pin in
    /// `reserved` (see [`crate::Platform::reserved_pins`]).
    pub fn validate_with(&self, reserved: &[PinId]) -> Result<(), ConfigError> {
        if self.supply_mv == 0 {
            return Err(ConfigError::ZeroSupplyVoltage);
        }
        if self.nominal_mv == 0 {
            return Err(ConfigError::ZeroNominalVoltage);
        }

        const ROLES: usize = MOTOR_COUNT * 2 + INPUT_COUNT + ANALOG_COUNT;
        let mut used: [Option<PinId>; ROLES] = [None; ROLES];
        let mut n = 0;

        let mut claim = |pin: Option<PinId>| -> Result<(), ConfigError> {
            if let Some(pin) = pin {
                if reserved.contains(&pin) || used[..n].contains(&Some(pin)) {
                    return Err(ConfigError::DuplicatePin(pin));
                }
                used[n] = Some(pin);
                n += 1;
            }
            Ok(())
        };

        for motor in &self.motors {
            claim(Some(motor.pwm))?;
            claim(motor.direction)?;
        }
        for input in &self.inputs {
            claim(input.pin)?;
        }
        for pin in &self.analog {
            claim(Some(*pin))?;
        }
        Ok(())
    }
}
