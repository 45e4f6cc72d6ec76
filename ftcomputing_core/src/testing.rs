// Recording platform for host tests.

use core::ops::{Deref, DerefMut};

use crate::pin::PinId;
use crate::platform::{Level, PinMode, Platform};

/// One platform call, in the order it was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Mode(PinId, PinMode),
    Digital(PinId, Level),
    ReadDigital(PinId),
    Pwm(PinId, u16),
    ReadAnalog(PinId),
}

const PINS: usize = 32;

#[derive(Debug)]
pub struct MockPlatform {
    calls: Vec<Call>,
    levels: [Level; PINS],
    samples: [u16; PINS],
    reserved: Vec<PinId>,
}

impl MockPlatform {
    /// All inputs float high, like pulled-up pins with nothing pressed.
    pub fn new() -> Self {
        MockPlatform {
            calls: Vec::new(),
            levels: [Level::High; PINS],
            samples: [0; PINS],
            reserved: Vec::new(),
        }
    }

    /// Pins the board keeps for itself.
    pub fn with_reserved(mut self, pins: &[u8]) -> Self {
        self.reserved = pins.iter().copied().map(PinId::new).collect();
        self
    }

    pub fn set_level(&mut self, pin: PinId, level: Level) {
        self.levels[pin.number() as usize] = level;
    }

    pub fn set_sample(&mut self, pin: PinId, sample: u16) {
        self.samples[pin.number() as usize] = sample;
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    pub fn last_pwm(&self, pin: PinId) -> Option<u16> {
        self.calls.iter().rev().find_map(|c| match *c {
            Call::Pwm(p, duty) if p == pin => Some(duty),
            _ => None,
        })
    }

    pub fn last_digital(&self, pin: PinId) -> Option<Level> {
        self.calls.iter().rev().find_map(|c| match *c {
            Call::Digital(p, level) if p == pin => Some(level),
            _ => None,
        })
    }

    pub fn mode_of(&self, pin: PinId) -> Option<PinMode> {
        self.calls.iter().rev().find_map(|c| match *c {
            Call::Mode(p, mode) if p == pin => Some(mode),
            _ => None,
        })
    }
}

impl Platform for MockPlatform {
    const PWM_MAX: u16 = 255;

    fn reserved_pins(&self) -> &[PinId] {
        &self.reserved
    }

    fn configure_pin_mode(&mut self, pin: PinId, mode: PinMode) {
        self.calls.push(Call::Mode(pin, mode));
    }

    fn write_digital(&mut self, pin: PinId, level: Level) {
        self.calls.push(Call::Digital(pin, level));
    }

    fn read_digital(&mut self, pin: PinId) -> Level {
        self.calls.push(Call::ReadDigital(pin));
        self.levels[pin.number() as usize]
    }

    fn write_pwm(&mut self, pin: PinId, duty: u16) {
        self.calls.push(Call::Pwm(pin, duty));
    }

    fn read_analog(&mut self, pin: PinId) -> u16 {
        self.calls.push(Call::ReadAnalog(pin));
        self.samples[pin.number() as usize]
    }
}

/// Recorder with a 16-bit PWM range.
#[derive(Debug)]
pub struct WidePlatform(MockPlatform);

impl WidePlatform {
    pub fn new() -> Self {
        WidePlatform(MockPlatform::new())
    }
}

impl Deref for WidePlatform {
    type Target = MockPlatform;

    fn deref(&self) -> &MockPlatform {
        &self.0
    }
}

impl DerefMut for WidePlatform {
    fn deref_mut(&mut self) -> &mut MockPlatform {
        &mut self.0
    }
}

impl Platform for WidePlatform {
    const PWM_MAX: u16 = u16::MAX;

    fn configure_pin_mode(&mut self, pin: PinId, mode: PinMode) {
        self.0.configure_pin_mode(pin, mode);
    }

    fn write_digital(&mut self, pin: PinId, level: Level) {
        self.0.write_digital(pin, level);
    }

    fn read_digital(&mut self, pin: PinId) -> Level {
        self.0.read_digital(pin)
    }

    fn write_pwm(&mut self, pin: PinId, duty: u16) {
        self.0.write_pwm(pin, duty);
    }

    fn read_analog(&mut self, pin: PinId) -> u16 {
        self.0.read_analog(pin)
    }
}
