// Implements the E-inputs of the kit: push-buttons and reed contacts wired
// between a pulled-up pin and ground.

// Key Features:
// - Maps the raw electrical level to a positive-logic active flag
// - Polarity is configurable per input, active-low by default
// - Unassigned inputs are inert and always report inactive

// Detailed Operation:
// The pull-up keeps an open contact high, so a closed contact reads low.
// This needs no external resistors, the polarity setting turns that back
// into "pressed means active" for the application.

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

use crate::pin::PinId;
use crate::platform::{Level, PinMode, Platform};

/// Electrical level that counts as "active".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Closed contact pulls the pin low
    #[default]
    ActiveLow,
    /// Closed contact drives the pin high
    ActiveHigh,
}

impl Polarity {
    #[inline(always)]
    pub const fn active_level(self) -> Level {
        match self {
            Polarity::ActiveLow => Level::Low,
            Polarity::ActiveHigh => Level::High,
        }
    }
}

/// Polarity-aware digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitalSensor {
    pin: Option<PinId>,
    polarity: Polarity,
}

impl DigitalSensor {
    /// Binds the input, enabling the pull-up if a pin is assigned.
    pub fn new<P: Platform>(io: &mut P, pin: Option<PinId>, polarity: Polarity) -> Self {
        if let Some(pin) = pin {
            io.configure_pin_mode(pin, PinMode::InputPullUp);
        }
        DigitalSensor { pin, polarity }
    }

    /// True if the raw level equals the active level, false when unassigned.
    pub fn is_active<P: Platform>(&self, io: &mut P) -> bool {
        match self.pin {
            Some(pin) => io.read_digital(pin) == self.polarity.active_level(),
            None => {
                trace!("read of unassigned input");
                false
            }
        }
    }

    #[inline(always)]
    pub fn is_inactive<P: Platform>(&self, io: &mut P) -> bool {
        !self.is_active(io)
    }

    /// Button reading of [`DigitalSensor::is_active`].
    #[inline(always)]
    pub fn is_depressed<P: Platform>(&self, io: &mut P) -> bool {
        self.is_active(io)
    }

    /// Button reading of [`DigitalSensor::is_inactive`].
    #[inline(always)]
    pub fn is_released<P: Platform>(&self, io: &mut P) -> bool {
        self.is_inactive(io)
    }

    /// The bound pin, `None` if the input is not wired.
    pub fn to_pin(&self) -> Option<PinId> {
        self.pin
    }

    pub fn polarity(&self) -> Polarity {
        self.polarity
    }
}
