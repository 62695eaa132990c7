pub(crate) const LEGACY_SYNC_PATTERN: &[u8] = &[0x5A, 0xA5, 0x00, 0xC0];
pub(crate) const LEGACY_BODY_SIZE: usize = 1440;
pub(crate) const PACKET_HEADER_BYTE: u8 = 0xFA;
pub(crate) const FIRST_INDEX_BYTE: u8 = 0xA0;
pub(crate) const PACKET_SYNC_PATTERN: &[u8] = &[PACKET_HEADER_BYTE, FIRST_INDEX_BYTE];
pub(crate) const PACKET_SIZE: usize = 22;
pub(crate) const SAMPLES_PER_PACKET: usize = 4;
pub(crate) const PACKETS_PER_REVOLUTION: usize = 90;
pub(crate) const FRAME_SIZE: usize = PACKET_SIZE * PACKETS_PER_REVOLUTION;
pub(crate) const SAMPLE_SIZE: usize = 4;
pub(crate) const N_ANGLES: usize = 360;
pub(crate) const ONE_DEGREE_RADIAN: f64 = 2.0 * std::f64::consts::PI / 360.0;
// Specific for each firmware generation
pub(crate) const LEGACY_RANGE_MIN: f64 = 0.06;
pub(crate) const PACKET_RANGE_MIN: f64 = 0.15;
pub(crate) const RANGE_MAX: f64 = 5.0;
pub(crate) const READ_TIMEOUT_MS: u64 = 1000;
pub(crate) const SCAN_QUEUE_SIZE: usize = 10;
