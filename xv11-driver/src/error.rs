use std::error::Error;
use std::fmt::Display;
use std::{fmt, io};

#[derive(Debug)]
pub enum Xv11Error {
    IoError(io::Error),
    SerialError(serialport::Error),
}

impl fmt::Display for Xv11Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Xv11Error::IoError(err) => Display::fmt(&err, f),
            Xv11Error::SerialError(err) => Display::fmt(&err, f),
        }
    }
}

impl Error for Xv11Error {}

impl From<io::Error> for Xv11Error {
    fn from(err: io::Error) -> Self {
        Xv11Error::IoError(err)
    }
}

impl From<serialport::Error> for Xv11Error {
    fn from(err: serialport::Error) -> Self {
        Xv11Error::SerialError(err)
    }
}
