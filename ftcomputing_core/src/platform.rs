//! Boundary to the microcontroller I/O primitives.
//!
//! Every call is synchronous and assumed to succeed. The board support crate
//! implements [`Platform`] on top of its HAL; tests implement it with a recorder.

use crate::pin::PinId;

/// Electrical level of a digital pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    /// Returns the opposite level.
    #[inline(always)]
    pub const fn inverted(self) -> Self {
        match self {
            Level::Low => Level::High,
            Level::High => Level::Low,
        }
    }
}

/// Pin configuration requested by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull digital output
    Output,
    /// Digital input with the internal pull-up enabled
    InputPullUp,
}

/// Platform I/O capability consumed by channels and sensors.
pub trait Platform {
    /// Largest duty cycle value accepted by [`Platform::write_pwm`] (full on).
    const PWM_MAX: u16;

    /// Configures `pin` for the given mode.
    fn configure_pin_mode(&mut self, pin: PinId, mode: PinMode);

    /// Drives a digital output pin.
    fn write_digital(&mut self, pin: PinId, level: Level);

    /// Samples the level of a digital input pin.
    fn read_digital(&mut self, pin: PinId) -> Level;

    /// Sets the PWM duty cycle of `pin`, `0..=PWM_MAX`.
    fn write_pwm(&mut self, pin: PinId, duty: u16);

    /// Returns the raw converter sample of an analog pin.
    fn read_analog(&mut self, pin: PinId) -> u16;

    /// Pins the board drives on its own and that no interface role may take.
    fn reserved_pins(&self) -> &[PinId] {
        &[]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inverted_swaps_levels() {
        assert_eq!(Level::Low.inverted(), Level::High);
        assert_eq!(Level::High.inverted(), Level::Low);
        assert_eq!(Level::High.inverted().inverted(), Level::High);
    }
}
