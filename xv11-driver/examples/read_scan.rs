use clap::{Arg, Command};
use xv11_data::FirmwareVersion;
use xv11_driver::run_driver;

fn parse_args() -> (String, FirmwareVersion) {
    let matches = Command::new("XV-11 scan receiver.")
        .about("Reads scans from a Neato XV-11 laser rangefinder.")
        .disable_version_flag(true)
        .arg(
            Arg::new("port")
                .help("The device path to a serial port")
                .use_value_delimiter(false)
                .required(true),
        )
        .arg(
            Arg::new("firmware")
                .help("Firmware generation running on the device, 1 or 2")
                .required(true),
        )
        .get_matches();

    let port_name: &String = matches.get_one("port").unwrap();
    let firmware: &String = matches.get_one("firmware").unwrap();
    let firmware = match firmware.as_str() {
        "1" => FirmwareVersion::V1,
        "2" => FirmwareVersion::V2,
        other => panic!("Unknown firmware generation \"{}\"", other),
    };
    (port_name.to_string(), firmware)
}

fn main() {
    env_logger::init();
    let (port_name, firmware) = parse_args();

    let (driver_threads, scan_rx) = run_driver(&port_name, firmware).unwrap();

    loop {
        let scan = match scan_rx.recv() {
            Ok(scan) => scan,
            Err(_) => break,
        };
        let returns = scan.ranges.iter().filter(|&&r| r > 0.0).count();
        println!(
            "scan_time = {:.3} s, {} of {} angles returned",
            scan.scan_time,
            returns,
            scan.ranges.len()
        );
    }

    drop(driver_threads);
}
