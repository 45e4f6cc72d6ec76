//! Pin definitions of the NUCLEO-G431RB Arduino headers and the motor shield on top.
use hal::gpio::{Pin, PinMode, Port};

pub mod header;
pub mod shield;

/// Represents the definition of a GPIO pin.
#[derive(Clone, Copy)]
pub struct PinDef {
    /// The port to which the pin belongs (e.g., Port::A, Port::B).
    port: Port,
    /// The pin number within the port.
    pin: u8,
    /// The mode of the pin (e.g., Output, Input, Alternate function).
    mode: PinMode,
}

impl PinDef {
    pub const fn new(port: Port, pin: u8, mode: PinMode) -> PinDef {
        PinDef { port, pin, mode }
    }

    /// Same port and pin with another mode.
    pub const fn with_mode(&self, mode: PinMode) -> PinDef {
        PinDef {
            port: self.port,
            pin: self.pin,
            mode,
        }
    }

    /// Converts the PinDef struct to a Pin struct. Useful for predefined pin configurations.
    /// # Example
    /// ```ignore
    /// let mut brake = pinout::shield::BRAKE_A.init();
    /// brake.set_low();
    /// ```
    pub fn init(&self) -> Pin {
        Pin::new(self.port, self.pin, self.mode)
    }
}
