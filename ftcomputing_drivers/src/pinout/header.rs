//! Arduino Uno numbering of the NUCLEO-G431RB morpho/Arduino connectors.
//!
//! D0..D13 are 0..13, A0..A5 continue at 14..19. D14/D15 (I2C) are not part
//! of the Uno numbering and are left out.
use hal::gpio::{PinMode, Port};

use super::PinDef;

/// Timer driving a PWM capable header pin.
#[derive(Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum PwmTimer {
    Tim2,
    Tim3,
    Tim4,
}

/// Timer channel and alternate function of a PWM pin.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PwmOut {
    pub timer: PwmTimer,
    /// Capture/compare channel, 1..=4
    pub channel: u8,
    /// Alternate function number routing the channel to the pin
    pub af: u8,
}

/// ADC instance and input channel of an analog pin.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct AdcIn {
    /// 1 for ADC1, 2 for ADC2
    pub adc: u8,
    pub channel: u8,
}

/// One header position.
#[derive(Clone, Copy)]
pub struct HeaderPin {
    pub gpio: PinDef,
    pub pwm: Option<PwmOut>,
    pub adc: Option<AdcIn>,
}

const fn io(port: Port, pin: u8) -> HeaderPin {
    HeaderPin {
        gpio: PinDef::new(port, pin, PinMode::Input),
        pwm: None,
        adc: None,
    }
}

const fn pwm(port: Port, pin: u8, timer: PwmTimer, channel: u8, af: u8) -> HeaderPin {
    HeaderPin {
        gpio: PinDef::new(port, pin, PinMode::Alt(af)),
        pwm: Some(PwmOut { timer, channel, af }),
        adc: None,
    }
}

const fn ain(port: Port, pin: u8, adc: u8, channel: u8) -> HeaderPin {
    HeaderPin {
        gpio: PinDef::new(port, pin, PinMode::Analog),
        pwm: None,
        adc: Some(AdcIn { adc, channel }),
    }
}

/// Number of header positions in Uno numbering.
pub const HEADER_PINS: usize = 20;

/// Header table indexed by Uno pin number.
///
/// D9 (PC7) would share TIM3_CH2 with D11 and is used as plain I/O.
pub const HEADER: [HeaderPin; HEADER_PINS] = [
    io(Port::C, 5),                          // D0
    io(Port::C, 4),                          // D1
    io(Port::A, 10),                         // D2
    pwm(Port::B, 3, PwmTimer::Tim2, 2, 1),   // D3
    io(Port::B, 5),                          // D4
    pwm(Port::B, 4, PwmTimer::Tim3, 1, 2),   // D5
    pwm(Port::B, 10, PwmTimer::Tim2, 3, 1),  // D6
    io(Port::A, 8),                          // D7
    io(Port::A, 9),                          // D8
    io(Port::C, 7),                          // D9
    pwm(Port::B, 6, PwmTimer::Tim4, 1, 2),   // D10
    pwm(Port::A, 7, PwmTimer::Tim3, 2, 2),   // D11
    io(Port::A, 6),                          // D12
    io(Port::A, 5),                          // D13
    ain(Port::A, 0, 1, 1),                   // A0
    ain(Port::A, 1, 1, 2),                   // A1
    ain(Port::A, 4, 2, 17),                  // A2
    ain(Port::B, 0, 1, 15),                  // A3
    ain(Port::C, 1, 1, 7),                   // A4
    ain(Port::C, 0, 1, 6),                   // A5
];

/// Looks up a header position, `None` for numbers outside the Uno range.
pub fn lookup(pin: u8) -> Option<&'static HeaderPin> {
    HEADER.get(pin as usize)
}
