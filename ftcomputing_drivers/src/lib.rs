#![no_std]

pub mod analog;
pub mod pinout;
pub mod platform;
pub mod pwm;

pub use platform::ShieldPlatform;
