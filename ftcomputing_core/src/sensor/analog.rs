use crate::pin::PinId;
use crate::platform::Platform;

/// Raw analog input, the EX/EY potentiometers of the kit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalogSensor {
    pin: PinId,
}

impl AnalogSensor {
    pub fn new(pin: PinId) -> Self {
        AnalogSensor { pin }
    }

    /// Platform sample as is, no scaling or filtering.
    #[inline(always)]
    pub fn reading<P: Platform>(&self, io: &mut P) -> u16 {
        io.read_analog(self.pin)
    }

    pub fn to_pin(&self) -> PinId {
        self.pin
    }
}
