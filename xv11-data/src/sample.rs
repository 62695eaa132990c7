#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One angular reading decoded from its four wire bytes.
///
/// The range occupies the low 14 bits of the little-endian byte0/byte1
/// pair; the top two bits of byte1 are status flags and never contribute
/// to the range value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sample {
    /// Distance to the target in millimeters.
    pub range_mm: u16,
    /// No return within the measurable range, or too low reflectivity.
    pub no_return: bool,
    /// Target closer than the reliable minimum, reading may be poor.
    pub too_close: bool,
    /// Return strength of the laser pulse.
    pub intensity: u16,
}

impl Sample {
    pub fn from_bytes(bytes: [u8; 4]) -> Sample {
        let [byte0, byte1, byte2, byte3] = bytes;
        Sample {
            range_mm: (((byte1 & 0x3F) as u16) << 8) | byte0 as u16,
            no_return: byte1 & 0x80 != 0,
            too_close: byte1 & 0x40 != 0,
            intensity: ((byte3 as u16) << 8) | byte2 as u16,
        }
    }
}
