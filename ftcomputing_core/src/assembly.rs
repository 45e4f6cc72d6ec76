// Implements the fischertechnik Computing interface as a whole: three motor
// outputs, eight E-inputs and the two EX/EY potentiometer inputs, all bound
// to the pins of one board.

// Key Features:
// - Validates the wiring and derives the derated PWM ceiling once
// - Owns the platform, hands out short-lived handles per output/input
// - E8 is the legacy name of E0 and resolves to the same table slot
// - Samples all inputs into a single byte like the kit interface did

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use crate::actuator::ActuatorChannel;
use crate::config::{AssemblyConfig, ANALOG_COUNT, INPUT_COUNT, MOTOR_COUNT};
use crate::derating;
use crate::error::ConfigError;
use crate::pin::PinId;
use crate::platform::Platform;
use crate::sensor::{AnalogSensor, DigitalSensor};

/// Motor outputs of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorId {
    M1 = 0,
    M2 = 1,
    M3 = 2,
}

/// Digital inputs of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputId {
    E0,
    E1,
    E2,
    E3,
    E4,
    E5,
    E6,
    E7,
    /// Legacy numbering, same input as E0
    E8,
}

impl InputId {
    /// Primary inputs in bit order of [`InputSnapshot`].
    pub const ALL: [InputId; INPUT_COUNT] = [
        InputId::E0,
        InputId::E1,
        InputId::E2,
        InputId::E3,
        InputId::E4,
        InputId::E5,
        InputId::E6,
        InputId::E7,
    ];

    /// Slot in the sensor table, aliases resolve to their primary input.
    #[inline(always)]
    pub const fn index(self) -> usize {
        match self {
            InputId::E0 | InputId::E8 => 0,
            InputId::E1 => 1,
            InputId::E2 => 2,
            InputId::E3 => 3,
            InputId::E4 => 4,
            InputId::E5 => 5,
            InputId::E6 => 6,
            InputId::E7 => 7,
        }
    }
}

/// Potentiometer inputs of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogId {
    EX = 0,
    EY = 1,
}

/// All E-inputs sampled at once, bit n set when input n is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot(u8);

impl InputSnapshot {
    pub const fn from_bits(bits: u8) -> Self {
        InputSnapshot(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_active(self, id: InputId) -> bool {
        self.0 & (1 << id.index()) != 0
    }

    pub const fn any_active(self) -> bool {
        self.0 != 0
    }
}

/// The interface bound to one platform.
pub struct DeviceAssembly<P: Platform> {
    io: P,
    supply_mv: u32,
    nominal_mv: u32,
    max_duty: u16,
    motors: [ActuatorChannel; MOTOR_COUNT],
    inputs: [DigitalSensor; INPUT_COUNT],
    analog: [AnalogSensor; ANALOG_COUNT],
}

impl<P: Platform> DeviceAssembly<P> {
    /// Validates `config`, derives the duty ceiling and binds every role.
    ///
    /// All motors are stopped and all wired inputs have their pull-ups
    /// enabled when this returns. Pins listed by [`Platform::reserved_pins`]
    /// count as taken. A rejected configuration hands the untouched platform
    /// back together with the error.
    pub fn new(mut io: P, config: AssemblyConfig) -> Result<Self, (P, ConfigError)> {
        if let Err(err) = config.validate_with(io.reserved_pins()) {
            debug!("configuration rejected: {}", err);
            return Err((io, err));
        }

        if derating::saturates(config.nominal_mv, config.supply_mv) {
            warn!(
                "nominal {=u32}mV is above the derating range of {=u32}mV supply, PWM not limited",
                config.nominal_mv,
                config.supply_mv
            );
        }
        let max_duty = derating::max_duty_cycle(P::PWM_MAX, config.nominal_mv, config.supply_mv);

        let motors = config.motors.map(|m| {
            debug!("motor: pwm {} dir {}", m.pwm, m.direction);
            ActuatorChannel::new(&mut io, m.pwm, m.direction, max_duty)
        });
        let inputs = config.inputs.map(|e| {
            debug!("input: pin {} {}", e.pin, e.polarity);
            DigitalSensor::new(&mut io, e.pin, e.polarity)
        });
        let analog = config.analog.map(AnalogSensor::new);

        info!(
            "interface ready: supply {=u32}mV, motors {=u32}mV, max duty {=u16}/{=u16}",
            config.supply_mv,
            config.nominal_mv,
            max_duty,
            P::PWM_MAX
        );

        Ok(DeviceAssembly {
            io,
            supply_mv: config.supply_mv,
            nominal_mv: config.nominal_mv,
            max_duty,
            motors,
            inputs,
            analog,
        })
    }

    pub fn motor(&mut self, id: MotorId) -> Motor<'_, P> {
        Motor {
            channel: &self.motors[id as usize],
            io: &mut self.io,
        }
    }

    #[inline(always)]
    pub fn motor1(&mut self) -> Motor<'_, P> {
        self.motor(MotorId::M1)
    }

    #[inline(always)]
    pub fn motor2(&mut self) -> Motor<'_, P> {
        self.motor(MotorId::M2)
    }

    #[inline(always)]
    pub fn motor3(&mut self) -> Motor<'_, P> {
        self.motor(MotorId::M3)
    }

    pub fn input(&mut self, id: InputId) -> Input<'_, P> {
        Input {
            sensor: &self.inputs[id.index()],
            io: &mut self.io,
        }
    }

    pub fn e0(&mut self) -> Input<'_, P> {
        self.input(InputId::E0)
    }

    pub fn e1(&mut self) -> Input<'_, P> {
        self.input(InputId::E1)
    }

    pub fn e2(&mut self) -> Input<'_, P> {
        self.input(InputId::E2)
    }

    pub fn e3(&mut self) -> Input<'_, P> {
        self.input(InputId::E3)
    }

    pub fn e4(&mut self) -> Input<'_, P> {
        self.input(InputId::E4)
    }

    pub fn e5(&mut self) -> Input<'_, P> {
        self.input(InputId::E5)
    }

    pub fn e6(&mut self) -> Input<'_, P> {
        self.input(InputId::E6)
    }

    pub fn e7(&mut self) -> Input<'_, P> {
        self.input(InputId::E7)
    }

    /// Legacy name of [`DeviceAssembly::e0`].
    pub fn e8(&mut self) -> Input<'_, P> {
        self.input(InputId::E8)
    }

    pub fn analog(&mut self, id: AnalogId) -> Analog<'_, P> {
        Analog {
            sensor: &self.analog[id as usize],
            io: &mut self.io,
        }
    }

    pub fn ex(&mut self) -> Analog<'_, P> {
        self.analog(AnalogId::EX)
    }

    pub fn ey(&mut self) -> Analog<'_, P> {
        self.analog(AnalogId::EY)
    }

    /// Reads E0..E7 into one byte.
    pub fn inputs(&mut self) -> InputSnapshot {
        let mut bits = 0u8;
        for (n, sensor) in self.inputs.iter().enumerate() {
            if sensor.is_active(&mut self.io) {
                bits |= 1 << n;
            }
        }
        InputSnapshot(bits)
    }

    pub fn stop_all(&mut self) {
        for motor in &self.motors {
            motor.stop(&mut self.io);
        }
    }

    /// Duty ceiling shared by all motors.
    pub fn max_duty_cycle(&self) -> u16 {
        self.max_duty
    }

    pub fn supply_mv(&self) -> u32 {
        self.supply_mv
    }

    pub fn nominal_mv(&self) -> u32 {
        self.nominal_mv
    }

    /// Direct access to the platform, e.g. for pins outside the interface.
    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.io
    }

    /// Stops all motors and returns the platform.
    pub fn release(mut self) -> P {
        self.stop_all();
        self.io
    }
}

/// Motor output borrowed from a [`DeviceAssembly`].
///
/// Methods without a duty argument run at the assembly maximum.
pub struct Motor<'a, P: Platform> {
    channel: &'a ActuatorChannel,
    io: &'a mut P,
}

impl<P: Platform> Motor<'_, P> {
    #[inline(always)]
    fn full(&self) -> i32 {
        i32::from(self.channel.max_duty())
    }

    pub fn forward_at(&mut self, duty: i32) {
        self.channel.drive_forward(self.io, duty);
    }

    pub fn reverse_at(&mut self, duty: i32) {
        self.channel.drive_reverse(self.io, duty);
    }

    pub fn forward(&mut self) {
        let duty = self.full();
        self.forward_at(duty);
    }

    pub fn reverse(&mut self) {
        let duty = self.full();
        self.reverse_at(duty);
    }

    pub fn stop(&mut self) {
        self.channel.stop(self.io);
    }

    #[inline(always)]
    pub fn right(&mut self) {
        self.forward();
    }

    #[inline(always)]
    pub fn right_at(&mut self, duty: i32) {
        self.forward_at(duty);
    }

    #[inline(always)]
    pub fn left(&mut self) {
        self.reverse();
    }

    #[inline(always)]
    pub fn left_at(&mut self, duty: i32) {
        self.reverse_at(duty);
    }

    #[inline(always)]
    pub fn up(&mut self) {
        self.forward();
    }

    #[inline(always)]
    pub fn up_at(&mut self, duty: i32) {
        self.forward_at(duty);
    }

    #[inline(always)]
    pub fn down(&mut self) {
        self.reverse();
    }

    #[inline(always)]
    pub fn down_at(&mut self, duty: i32) {
        self.reverse_at(duty);
    }

    #[inline(always)]
    pub fn on(&mut self) {
        self.forward();
    }

    #[inline(always)]
    pub fn on_at(&mut self, duty: i32) {
        self.forward_at(duty);
    }

    #[inline(always)]
    pub fn off(&mut self) {
        self.stop();
    }

    #[inline(always)]
    pub fn forwards(&mut self) {
        self.forward();
    }

    #[inline(always)]
    pub fn forwards_at(&mut self, duty: i32) {
        self.forward_at(duty);
    }

    #[inline(always)]
    pub fn backwards(&mut self) {
        self.reverse();
    }

    #[inline(always)]
    pub fn backwards_at(&mut self, duty: i32) {
        self.reverse_at(duty);
    }

    pub fn channel(&self) -> &ActuatorChannel {
        self.channel
    }
}

/// Digital input borrowed from a [`DeviceAssembly`].
pub struct Input<'a, P: Platform> {
    sensor: &'a DigitalSensor,
    io: &'a mut P,
}

impl<P: Platform> Input<'_, P> {
    pub fn is_active(&mut self) -> bool {
        self.sensor.is_active(self.io)
    }

    pub fn is_inactive(&mut self) -> bool {
        self.sensor.is_inactive(self.io)
    }

    pub fn is_depressed(&mut self) -> bool {
        self.sensor.is_depressed(self.io)
    }

    pub fn is_released(&mut self) -> bool {
        self.sensor.is_released(self.io)
    }

    pub fn to_pin(&self) -> Option<PinId> {
        self.sensor.to_pin()
    }
}

/// Analog input borrowed from a [`DeviceAssembly`].
pub struct Analog<'a, P: Platform> {
    sensor: &'a AnalogSensor,
    io: &'a mut P,
}

impl<P: Platform> Analog<'_, P> {
    pub fn reading(&mut self) -> u16 {
        self.sensor.reading(self.io)
    }

    pub fn to_pin(&self) -> PinId {
        self.sensor.to_pin()
    }
}
