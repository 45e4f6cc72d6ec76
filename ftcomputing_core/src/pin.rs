//! Pin identifiers in Arduino header numbering (D0..D13, A0 = 14 ..).

use crate::error::ConfigError;

/// Raw pin value meaning "not wired".
pub const UNASSIGNED: i16 = -1;

/// Physical pin id as printed on the controller headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinId(u8);

impl PinId {
    pub const fn new(pin: u8) -> Self {
        PinId(pin)
    }

    /// Converts a raw pin number where [`UNASSIGNED`] (-1) marks an unwired role.
    ///
    /// # Returns
    /// * `Ok(None)` for the sentinel
    /// * `Ok(Some(pin))` for `0..=255`
    /// * `Err(ConfigError::NegativePin)` for any other negative value
    pub fn from_raw(raw: i16) -> Result<Option<PinId>, ConfigError> {
        match raw {
            UNASSIGNED => Ok(None),
            r if r < 0 => Err(ConfigError::NegativePin(r)),
            r => u8::try_from(r)
                .map(|p| Some(PinId(p)))
                .map_err(|_| ConfigError::PinOutOfRange(r)),
        }
    }

    /// Raw pin number, or [`UNASSIGNED`] for `None`.
    pub fn to_raw(pin: Option<PinId>) -> i16 {
        pin.map_or(UNASSIGNED, |p| p.0 as i16)
    }

    #[inline(always)]
    pub const fn number(self) -> u8 {
        self.0
    }
}

impl From<u8> for PinId {
    fn from(pin: u8) -> Self {
        PinId(pin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_maps_to_none() {
        assert_eq!(PinId::from_raw(UNASSIGNED), Ok(None));
        assert_eq!(PinId::to_raw(None), UNASSIGNED);
    }

    #[test]
    fn plain_pin_numbers_are_kept() {
        assert_eq!(PinId::from_raw(0), Ok(Some(PinId::new(0))));
        assert_eq!(PinId::from_raw(13), Ok(Some(PinId::new(13))));
        assert_eq!(PinId::to_raw(Some(PinId::new(13))), 13);
    }

    #[test]
    fn other_negative_values_are_rejected() {
        assert_eq!(PinId::from_raw(-2), Err(ConfigError::NegativePin(-2)));
        assert_eq!(PinId::from_raw(i16::MIN), Err(ConfigError::NegativePin(i16::MIN)));
    }

    #[test]
    fn values_above_u8_are_rejected() {
        assert_eq!(PinId::from_raw(256), Err(ConfigError::PinOutOfRange(256)));
    }
}
