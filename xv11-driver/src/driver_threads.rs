use crate::decoder::Decoder;
use crossbeam_channel::{Receiver, Sender};
use log::{debug, error};
use std::sync::mpsc;
use std::thread::JoinHandle;
use xv11_data::Scan;

/// Struct that contains the driver thread.
pub struct DriverThreads {
    pub(crate) poller_terminator_tx: Sender<bool>,
    pub(crate) poller_thread: Option<JoinHandle<()>>,
}

/// Polls the decoder for completed revolutions and forwards them to the
/// consumer. Exits when terminated, when the consumer goes away, or when
/// the transport fails mid-revolution.
pub(crate) fn poll_scans(
    mut decoder: Box<dyn Decoder>,
    scan_tx: mpsc::SyncSender<Scan>,
    poller_terminator_rx: Receiver<bool>,
) {
    while !do_terminate(&poller_terminator_rx) {
        let scan = match decoder.poll() {
            Ok(scan) => scan,
            Err(e) => {
                error!("{e}");
                return;
            }
        };
        if let Err(e) = scan_tx.send(scan) {
            debug!("{e}");
            return;
        }
    }
}

pub(crate) fn do_terminate(terminator_rx: &Receiver<bool>) -> bool {
    terminator_rx.try_recv().unwrap_or(false)
}

/// Function to join the driver thread.
/// This function is automatically called when `driver_threads` is dropped.
pub fn join(driver_threads: &mut DriverThreads) {
    // The poller exits on its own after a transport failure, in which
    // case the terminator has no receiver anymore.
    let _ = driver_threads.poller_terminator_tx.send(true);

    if let Some(thread) = driver_threads.poller_thread.take() {
        thread.join().unwrap();
    }
}

impl Drop for DriverThreads {
    fn drop(&mut self) {
        join(self);
    }
}
