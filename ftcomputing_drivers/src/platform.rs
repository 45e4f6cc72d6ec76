//! [`Platform`] implementation for a NUCLEO-G431RB with an Arduino Motor Shield.
//!
//! Pin ids are Uno header numbers (see [`crate::pinout::header`]). Calls on
//! pins outside the header are ignored and reads return 0/low, matching the
//! "never fails" contract of the core. The shield brake lines are reported as
//! reserved and never reconfigured.
use hal::{
    clocks::Clocks,
    gpio::{Pin, PinMode, Pull},
    pac::{ADC1, ADC2, TIM2, TIM3, TIM4},
};

use ftcomputing_core::{Level, PinId, Platform};

use crate::analog::ShieldAdc;
use crate::pinout::header::{self, HEADER_PINS};
use crate::pinout::shield;
use crate::pwm::ShieldPwm;

pub struct ShieldPlatform {
    pins: [Option<Pin>; HEADER_PINS], // Digital pins configured so far
    pwm: ShieldPwm,
    adc: ShieldAdc,
}

impl ShieldPlatform {
    pub fn new(
        tim2: TIM2,
        tim3: TIM3,
        tim4: TIM4,
        adc1: ADC1,
        adc2: ADC2,
        clock_cfg: &Clocks,
    ) -> Self {
        let mut pwm = ShieldPwm::new(tim2, tim3, tim4, clock_cfg);
        pwm.begin();
        let adc = ShieldAdc::new(adc1, adc2, clock_cfg);

        // Brakes are active high, release them so the H-bridges follow PWM/DIR
        shield::BRAKE_A.init().set_low();
        shield::BRAKE_B.init().set_low();

        defmt::debug!("SHIELD: PWM at {} Hz, brakes released", crate::pwm::PWM_FREQ_HZ);

        ShieldPlatform {
            pins: core::array::from_fn(|_| None),
            pwm,
            adc,
        }
    }

    fn digital(&mut self, pin: PinId, mode: PinMode) -> Option<&mut Pin> {
        if shield::RESERVED.contains(&pin) {
            return None;
        }
        let def = header::lookup(pin.number())?;
        let slot = &mut self.pins[pin.number() as usize];
        Some(slot.get_or_insert_with(|| def.gpio.with_mode(mode).init()))
    }
}

impl Platform for ShieldPlatform {
    // analogWrite resolution of the Uno
    const PWM_MAX: u16 = 255;

    fn configure_pin_mode(&mut self, pin: PinId, mode: ftcomputing_core::PinMode) {
        let Some(def) = header::lookup(pin.number()) else {
            defmt::warn!("SHIELD: pin {} is not on the header", pin);
            return;
        };
        if shield::RESERVED.contains(&pin) {
            defmt::warn!("SHIELD: pin {} is a brake line, not reconfigured", pin);
            return;
        }
        let gpio = match mode {
            ftcomputing_core::PinMode::Output => def.gpio.with_mode(PinMode::Output).init(),
            ftcomputing_core::PinMode::InputPullUp => {
                let mut p = def.gpio.with_mode(PinMode::Input).init();
                p.pull(Pull::Up);
                p
            }
        };
        self.pins[pin.number() as usize] = Some(gpio);
    }

    fn write_digital(&mut self, pin: PinId, level: Level) {
        if let Some(gpio) = self.digital(pin, PinMode::Output) {
            match level {
                Level::High => gpio.set_high(),
                Level::Low => gpio.set_low(),
            }
        }
    }

    fn read_digital(&mut self, pin: PinId) -> Level {
        match self.digital(pin, PinMode::Input) {
            Some(gpio) if gpio.is_high() => Level::High,
            _ => Level::Low,
        }
    }

    fn write_pwm(&mut self, pin: PinId, duty: u16) {
        let Some(def) = header::lookup(pin.number()) else {
            return;
        };
        match def.pwm {
            Some(out) => self.pwm.apply(out, duty, Self::PWM_MAX),
            None => {
                // Same fallback as analogWrite on a pin without a timer
                let level = if duty > Self::PWM_MAX / 2 { Level::High } else { Level::Low };
                self.write_digital(pin, level);
            }
        }
    }

    fn read_analog(&mut self, pin: PinId) -> u16 {
        match header::lookup(pin.number()).and_then(|def| def.adc) {
            Some(input) => self.adc.read(input),
            None => 0,
        }
    }

    fn reserved_pins(&self) -> &[PinId] {
        &shield::RESERVED
    }
}
