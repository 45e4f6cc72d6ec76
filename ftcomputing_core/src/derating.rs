// Derives the PWM ceiling that keeps the average motor voltage of the
// fischertechnik motors within their rating when the shield is supplied
// from a higher voltage.

// Key Features:
// - Linear derating of the full PWM range by nominal / supply voltage
// - Fixed 2/3 correction factor calibrated for the 6V kit motors
// - Saturates at the platform PWM maximum

// Licensed under the Apache License, Version 2.0
// Copyright 2024 Anton Khrustalev, creapunk.com

/// Numerator of the empirical correction applied on top of the voltage ratio.
pub const CORRECTION_NUM: u64 = 2;
/// Denominator of the empirical correction applied on top of the voltage ratio.
pub const CORRECTION_DEN: u64 = 3;

/// Nominal voltage of the kit motors in millivolts.
pub const KIT_NOMINAL_MV: u32 = 6000;

/// Calculates the maximum admissible duty cycle.
///
/// `floor((2 * pwm_max * nominal_mv) / (3 * supply_mv))`, capped at `pwm_max`.
///
/// # Arguments
/// * `pwm_max` - Full-on duty value of the platform [u16]
/// * `nominal_mv` - Rated voltage of the actuators in millivolts [u32]
/// * `supply_mv` - Voltage feeding the driver in millivolts [u32]
///
/// # Returns
/// The duty cycle ceiling [u16], 0 if `supply_mv` is 0
pub const fn max_duty_cycle(pwm_max: u16, nominal_mv: u32, supply_mv: u32) -> u16 {
    if supply_mv == 0 {
        return 0;
    }
    // u64 keeps 2 * 65535 * u32::MAX clear of overflow
    let num = CORRECTION_NUM * pwm_max as u64 * nominal_mv as u64;
    let den = CORRECTION_DEN * supply_mv as u64;
    let duty = num / den;
    if duty > pwm_max as u64 {
        pwm_max
    } else {
        duty as u16
    }
}

/// Returns true if the derated ceiling would exceed full-on and is capped.
pub const fn saturates(nominal_mv: u32, supply_mv: u32) -> bool {
    CORRECTION_NUM * nominal_mv as u64 > CORRECTION_DEN * supply_mv as u64
}
