// Implements a single motor output of the shield: one PWM pin for the
// speed and an optional direction pin of the H-bridge.

// Key Features:
// - Clamps every requested duty cycle into [0, max_duty]
// - Writes the direction level first, then the PWM level
// - Leaves the output stopped after construction

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use crate::pin::PinId;
use crate::platform::{Level, PinMode, Platform};

/// Rotation direction of a motor output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// "right" on the kit, direction pin low
    Forward,
    /// "left" on the kit, direction pin high
    Reverse,
}

impl Direction {
    /// Level written to the H-bridge direction pin.
    #[inline(always)]
    pub const fn level(self) -> Level {
        match self {
            Direction::Forward => Level::Low,
            Direction::Reverse => Level::High,
        }
    }
}

/// PWM output with optional direction control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActuatorChannel {
    pwm_pin: PinId,              // Speed, driven by the platform PWM
    direction_pin: Option<PinId>, // H-bridge direction, None on single-direction outputs
    max_duty: u16,               // Derated ceiling shared by the whole assembly
}

impl ActuatorChannel {
    /// Binds the pins and stops the output.
    ///
    /// # Arguments
    /// * `io` - Platform used for the initial pin setup
    /// * `pwm_pin` - Pin carrying the speed signal
    /// * `direction_pin` - Optional direction pin
    /// * `max_duty` - Largest duty cycle this channel will ever write
    pub fn new<P: Platform>(
        io: &mut P,
        pwm_pin: PinId,
        direction_pin: Option<PinId>,
        max_duty: u16,
    ) -> Self {
        if let Some(dir) = direction_pin {
            io.configure_pin_mode(dir, PinMode::Output);
        }
        let channel = ActuatorChannel {
            pwm_pin,
            direction_pin,
            max_duty: max_duty.min(P::PWM_MAX),
        };
        channel.stop(io);
        channel
    }

    /// Restricts a requested duty cycle to `[0, max_duty]`.
    ///
    /// Requests are `i32` so every `u16` ceiling stays reachable.
    #[inline(always)]
    pub fn clamp_duty(&self, duty: i32) -> u16 {
        duty.clamp(0, i32::from(self.max_duty)) as u16
    }

    /// Sets the direction pin (if any) and writes the clamped duty cycle.
    pub fn drive<P: Platform>(&self, io: &mut P, direction: Direction, duty: i32) {
        if let Some(dir) = self.direction_pin {
            io.write_digital(dir, direction.level());
        }
        let clamped = self.clamp_duty(duty);
        if i32::from(clamped) != duty {
            trace!("duty {=i32} clamped to {=u16}", duty, clamped);
        }
        io.write_pwm(self.pwm_pin, clamped);
    }

    #[inline(always)]
    pub fn drive_forward<P: Platform>(&self, io: &mut P, duty: i32) {
        self.drive(io, Direction::Forward, duty);
    }

    #[inline(always)]
    pub fn drive_reverse<P: Platform>(&self, io: &mut P, duty: i32) {
        self.drive(io, Direction::Reverse, duty);
    }

    /// Forward direction with zero output, always a defined pin state.
    #[inline(always)]
    pub fn stop<P: Platform>(&self, io: &mut P) {
        self.drive_forward(io, 0);
    }

    /// Default duty cycle for calls without an explicit value.
    pub fn max_duty(&self) -> u16 {
        self.max_duty
    }

    pub fn pwm_pin(&self) -> PinId {
        self.pwm_pin
    }

    pub fn direction_pin(&self) -> Option<PinId> {
        self.direction_pin
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, MockPlatform, WidePlatform};

    const PWM: PinId = PinId::new(3);
    const DIR: PinId = PinId::new(12);

    fn channel(io: &mut MockPlatform, dir: Option<PinId>) -> ActuatorChannel {
        let ch = ActuatorChannel::new(io, PWM, dir, 85);
        io.clear_calls();
        ch
    }

    #[test]
    fn construction_configures_direction_and_stops() {
        let mut io = MockPlatform::new();
        ActuatorChannel::new(&mut io, PWM, Some(DIR), 85);
        assert_eq!(
            io.calls(),
            &[
                Call::Mode(DIR, PinMode::Output),
                Call::Digital(DIR, Level::Low),
                Call::Pwm(PWM, 0),
            ]
        );
    }

    #[test]
    fn construction_without_direction_only_stops() {
        let mut io = MockPlatform::new();
        ActuatorChannel::new(&mut io, PWM, None, 85);
        assert_eq!(io.calls(), &[Call::Pwm(PWM, 0)]);
    }

    #[test]
    fn forward_writes_low_then_duty() {
        let mut io = MockPlatform::new();
        let ch = channel(&mut io, Some(DIR));
        ch.drive_forward(&mut io, 40);
        assert_eq!(io.calls(), &[Call::Digital(DIR, Level::Low), Call::Pwm(PWM, 40)]);
    }

    #[test]
    fn reverse_writes_high_then_duty() {
        let mut io = MockPlatform::new();
        let ch = channel(&mut io, Some(DIR));
        ch.drive_reverse(&mut io, 40);
        assert_eq!(io.calls(), &[Call::Digital(DIR, Level::High), Call::Pwm(PWM, 40)]);
    }

    #[test]
    fn requests_above_max_are_clamped() {
        let mut io = MockPlatform::new();
        let ch = channel(&mut io, Some(DIR));
        for duty in [86, 100, 255, 1000, i32::MAX] {
            ch.drive_forward(&mut io, duty);
            assert_eq!(io.last_pwm(PWM), Some(85));
        }
    }

    #[test]
    fn clamping_is_idempotent() {
        let mut io = MockPlatform::new();
        let ch = channel(&mut io, None);
        for duty in [i32::MIN, -300, -1, 0, 1, 84, 85, 86, 300, i32::MAX] {
            let once = ch.clamp_duty(duty);
            assert_eq!(ch.clamp_duty(i32::from(once)), once);
        }
    }

    #[test]
    fn negative_requests_write_zero() {
        let mut io = MockPlatform::new();
        let ch = channel(&mut io, Some(DIR));
        ch.drive_reverse(&mut io, -20);
        assert_eq!(io.last_pwm(PWM), Some(0));
        assert_eq!(io.last_digital(DIR), Some(Level::High));
    }

    #[test]
    fn stop_after_reverse_resets_direction_and_duty() {
        let mut io = MockPlatform::new();
        let ch = channel(&mut io, Some(DIR));
        ch.drive_reverse(&mut io, 85);
        ch.stop(&mut io);
        assert_eq!(io.last_digital(DIR), Some(Level::Low));
        assert_eq!(io.last_pwm(PWM), Some(0));
    }

    #[test]
    fn no_direction_pin_means_single_write() {
        let mut io = MockPlatform::new();
        let ch = channel(&mut io, None);
        ch.drive_reverse(&mut io, 50);
        assert_eq!(io.calls(), &[Call::Pwm(PWM, 50)]);
    }

    #[test]
    fn full_scale_ceiling_is_reachable_on_wide_pwm() {
        let mut io = WidePlatform::new();
        let ch = ActuatorChannel::new(&mut io, PWM, Some(DIR), u16::MAX);
        assert_eq!(ch.max_duty(), u16::MAX);
        ch.drive_forward(&mut io, i32::from(u16::MAX));
        assert_eq!(io.last_pwm(PWM), Some(u16::MAX));
        ch.drive_reverse(&mut io, 40_000);
        assert_eq!(io.last_pwm(PWM), Some(40_000));
    }

    #[test]
    fn ceiling_never_exceeds_platform_max() {
        let mut io = MockPlatform::new();
        let ch = ActuatorChannel::new(&mut io, PWM, None, 1000);
        assert_eq!(ch.max_duty(), MockPlatform::PWM_MAX);
    }
}
