use crate::constants::{
    FIRST_INDEX_BYTE, FRAME_SIZE, N_ANGLES, PACKETS_PER_REVOLUTION, PACKET_HEADER_BYTE,
    PACKET_SIZE, PACKET_SYNC_PATTERN, SAMPLES_PER_PACKET, SAMPLE_SIZE,
};
use crate::decoder::Decoder;
use crate::error::Xv11Error;
use crate::numeric::to_u16_le;
use crate::scan::ScanFrame;
use crate::sync::SyncMatcher;
use log::debug;
use std::io::Read;
use xv11_data::{Sample, Scan};

/// Decoder for second-generation firmware, which emits 22-byte packets
/// of four readings each with per-packet motor-speed telemetry.
pub struct PacketizedDecoder<R> {
    source: R,
    rpm: u32,
}

impl<R> PacketizedDecoder<R> {
    pub fn new(source: R) -> PacketizedDecoder<R> {
        PacketizedDecoder { source, rpm: 0 }
    }

    /// Rotation speed averaged over the good packets of the last
    /// completed revolution, in revolutions per minute.
    pub fn rpm(&self) -> u32 {
        self.rpm
    }
}

impl<R: Read + Send> Decoder for PacketizedDecoder<R> {
    fn poll(&mut self) -> Result<Scan, Xv11Error> {
        // Wait until the first data sync of the frame, i.e. 0xFA, 0xA0
        let mut matcher = SyncMatcher::new(PACKET_SYNC_PATTERN);
        let mut byte = [0u8; 1];
        loop {
            self.source.read_exact(&mut byte)?;
            if matcher.push(byte[0]) {
                break;
            }
        }

        let mut frame = [0u8; FRAME_SIZE];
        frame[0] = PACKET_HEADER_BYTE;
        frame[1] = FIRST_INDEX_BYTE;
        self.source.read_exact(&mut frame[2..])?;

        let mut scan = Scan::packet_frame();
        let mut rpms_sum: u32 = 0;
        let mut good_packets: u32 = 0;

        // i iterates over the raw byte stream
        let mut i = 0;
        while i + PACKET_SIZE <= FRAME_SIZE {
            let packet_index = frame[i + 1].wrapping_sub(FIRST_INDEX_BYTE) as usize;
            if frame[i] != PACKET_HEADER_BYTE || packet_index >= PACKETS_PER_REVOLUTION {
                i += 1;
                continue;
            }

            // A premature header byte means the packet was cut short;
            // re-anchor on the embedded header instead of skipping it.
            if let Some(k) = (2..PACKET_SIZE).find(|&k| frame[i + k] == PACKET_HEADER_BYTE) {
                debug!("bad packet starting at i = {i}, header byte at offset {k}");
                i += k;
                continue;
            }

            // TODO: check the trailing CRC field too before declaring the packet good
            rpms_sum += (to_u16_le(frame[i + 2], frame[i + 3]) / 64) as u32;
            good_packets += 1;

            for offset in 0..SAMPLES_PER_PACKET {
                let angle = SAMPLES_PER_PACKET * packet_index + offset;
                let at = i + 4 + SAMPLE_SIZE * offset;
                let sample = Sample::from_bytes(frame[at..at + SAMPLE_SIZE].try_into().unwrap());
                scan.write_sample(angle, &sample);
            }

            if packet_index == PACKETS_PER_REVOLUTION - 1 {
                break; // angle 359 written, the revolution is complete
            }
            i += PACKET_SIZE;
        }

        debug!("good packets for this revolution: {good_packets}/{PACKETS_PER_REVOLUTION}");

        self.rpm = if good_packets > 0 {
            rpms_sum / good_packets
        } else {
            0
        };
        if self.rpm > 0 {
            scan.scan_time = 60.0 / (self.rpm as f64);
        }
        scan.time_increment = scan.scan_time / (N_ANGLES as f64);
        Ok(scan)
    }
}
