//! Configuration errors reported while building a [`crate::DeviceAssembly`].
//!
//! Pin operations themselves never fail, only the wiring description can be
//! rejected.

use thiserror::Error;

use crate::pin::PinId;

/// Reasons an [`crate::AssemblyConfig`] is refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Raw pin id below zero that is not the "not wired" sentinel
    #[error("negative pin id {0} (only -1 marks an unwired role)")]
    NegativePin(i16),

    /// Raw pin id that does not fit the header numbering
    #[error("pin id {0} is out of range")]
    PinOutOfRange(i16),

    /// Two roles bound to the same physical pin
    #[error("pin {0:?} is assigned to more than one role")]
    DuplicatePin(PinId),

    /// Supply voltage of zero, derating is undefined
    #[error("supply voltage must be above 0 mV")]
    ZeroSupplyVoltage,

    /// Nominal actuator voltage of zero
    #[error("nominal actuator voltage must be above 0 mV")]
    ZeroNominalVoltage,
}
