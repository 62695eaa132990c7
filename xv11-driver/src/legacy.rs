use crate::constants::{LEGACY_BODY_SIZE, LEGACY_SYNC_PATTERN, SAMPLE_SIZE};
use crate::decoder::Decoder;
use crate::error::Xv11Error;
use crate::numeric::to_u16_le;
use crate::scan::ScanFrame;
use crate::sync::SyncMatcher;
use std::io::Read;
use xv11_data::{Sample, Scan};

/// Decoder for first-generation firmware, which reports the motor speed
/// once per revolution and streams all 360 readings as one fixed body.
pub struct LegacyDecoder<R> {
    source: R,
}

impl<R> LegacyDecoder<R> {
    pub fn new(source: R) -> LegacyDecoder<R> {
        LegacyDecoder { source }
    }
}

impl<R: Read + Send> Decoder for LegacyDecoder<R> {
    fn poll(&mut self) -> Result<Scan, Xv11Error> {
        // Wait until the start sequence 0x5A, 0xA5, 0x00, 0xC0 comes around
        let mut matcher = SyncMatcher::new(LEGACY_SYNC_PATTERN);
        let mut byte = [0u8; 1];
        loop {
            self.source.read_exact(&mut byte)?;
            if matcher.push(byte[0]) {
                break;
            }
        }

        let mut speed = [0u8; 2];
        self.source.read_exact(&mut speed)?;
        let mut body = [0u8; LEGACY_BODY_SIZE];
        self.source.read_exact(&mut body)?;

        let mut scan = Scan::legacy_frame();
        scan.time_increment = (to_u16_le(speed[0], speed[1]) as f64) / 1e8;

        // Four bytes per reading; position in the body maps to the angle
        for (angle, bytes) in body.chunks_exact(SAMPLE_SIZE).enumerate() {
            let sample = Sample::from_bytes(bytes.try_into().unwrap());
            scan.write_sample(angle, &sample);
        }
        Ok(scan)
    }
}
