/// Firmware generation running on the device.
///
/// The two generations use incompatible wire formats, so the caller must
/// select the matching decoder at construction time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FirmwareVersion {
    /// First generation: motor speed once per revolution, single body.
    V1,
    /// Second generation: 22-byte packets of four readings each.
    V2,
}

pub fn firmware_baud_rate(firmware: FirmwareVersion) -> u32 {
    match firmware {
        FirmwareVersion::V1 => 115200,
        FirmwareVersion::V2 => 115200,
    }
}
