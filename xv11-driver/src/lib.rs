use std::sync::mpsc;

mod constants;
mod decoder;
mod driver_threads;
mod error;
mod legacy;
mod numeric;
mod packetized;
mod scan;
mod serial;
mod sync;

pub use crate::decoder::{make_decoder, Decoder};
pub use crate::driver_threads::{join, DriverThreads};
pub use crate::error::Xv11Error;
pub use crate::legacy::LegacyDecoder;
pub use crate::packetized::PacketizedDecoder;

use crate::constants::SCAN_QUEUE_SIZE;
use crate::driver_threads::poll_scans;
use crate::serial::{flush, open_port};
use crossbeam_channel::bounded;
use xv11_data::{FirmwareVersion, Scan};

/// Function to launch the XV-11 driver.
/// # Arguments
///
/// * `port_name` - Serial port name such as `/dev/ttyUSB0`.
/// * `firmware` - Firmware generation running on the device.
pub fn run_driver(
    port_name: &str,
    firmware: FirmwareVersion,
) -> Result<(DriverThreads, mpsc::Receiver<Scan>), Xv11Error> {
    let mut port = open_port(port_name, firmware)?;

    if !cfg!(test) {
        // In testing, disable flushing to receive dummy signals
        flush(&mut port)?;
    }

    let decoder = make_decoder(port, firmware);

    let (poller_terminator_tx, poller_terminator_rx) = bounded(10);
    let (scan_tx, scan_rx) = mpsc::sync_channel::<Scan>(SCAN_QUEUE_SIZE);

    let poller_thread = Some(std::thread::spawn(move || {
        poll_scans(decoder, scan_tx, poller_terminator_rx);
    }));

    let driver_threads = DriverThreads {
        poller_terminator_tx,
        poller_thread,
    };

    Ok((driver_threads, scan_rx))
}
