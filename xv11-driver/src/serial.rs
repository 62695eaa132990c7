use crate::constants::READ_TIMEOUT_MS;
use crate::error::Xv11Error;
use serialport::SerialPort;
use std::io::Read;
use xv11_data::{firmware_baud_rate, FirmwareVersion};

pub(crate) fn open_port(
    port_name: &str,
    firmware: FirmwareVersion,
) -> Result<Box<dyn SerialPort>, Xv11Error> {
    let port = serialport::new(port_name, firmware_baud_rate(firmware))
        .timeout(std::time::Duration::from_millis(READ_TIMEOUT_MS))
        .open()?;
    Ok(port)
}

pub(crate) fn get_n_read(port: &mut Box<dyn SerialPort>) -> Result<usize, Xv11Error> {
    let n_u32: u32 = port.bytes_to_read()?;
    Ok(n_u32.try_into().unwrap_or(0))
}

/// Drains whatever accumulated in the receive buffer before the driver
/// started, so the first revolution is decoded from live data.
pub(crate) fn flush(port: &mut Box<dyn SerialPort>) -> Result<(), Xv11Error> {
    let n_read: usize = get_n_read(port).unwrap_or(0);
    if n_read == 0 {
        return Ok(());
    }
    let mut stale: Vec<u8> = vec![0; n_read];
    port.read(stale.as_mut_slice())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::TTYPort;
    use std::io::Write;

    fn sleep_ms(duration: u64) {
        std::thread::sleep(std::time::Duration::from_millis(duration));
    }

    #[test]
    fn test_flush() {
        let (mut master, slave) = TTYPort::pair().expect("Unable to create ptty pair");
        master
            .write_all(&[0xFA, 0xA0, 0x00, 0x19, 0x2C, 0x01, 0x34, 0x00])
            .unwrap();

        let mut slave_ptr = Box::new(slave) as Box<dyn SerialPort>;

        sleep_ms(10);

        assert_eq!(slave_ptr.bytes_to_read().unwrap(), 8);
        flush(&mut slave_ptr).unwrap();
        assert_eq!(slave_ptr.bytes_to_read().unwrap(), 0);

        // when zero bytes to read
        flush(&mut slave_ptr).unwrap();
        assert_eq!(slave_ptr.bytes_to_read().unwrap(), 0);
    }
}
