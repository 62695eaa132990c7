use crate::error::Xv11Error;
use crate::legacy::LegacyDecoder;
use crate::packetized::PacketizedDecoder;
use std::io::Read;
use xv11_data::{FirmwareVersion, Scan};

/// Common decoding contract of the two firmware generations.
pub trait Decoder: Send {
    /// Blocks until one full revolution has been read from the byte
    /// source, then returns the completed scan. Any transport failure
    /// aborts the in-progress revolution; no partial scan is returned.
    fn poll(&mut self) -> Result<Scan, Xv11Error>;
}

/// Selects the decoder variant matching the configured firmware.
pub fn make_decoder<R>(source: R, firmware: FirmwareVersion) -> Box<dyn Decoder>
where
    R: Read + Send + 'static,
{
    match firmware {
        FirmwareVersion::V1 => Box::new(LegacyDecoder::new(source)),
        FirmwareVersion::V2 => Box::new(PacketizedDecoder::new(source)),
    }
}
