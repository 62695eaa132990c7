#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Struct to hold one revolution of laser scan data.
///
/// The two sample vectors always hold exactly 360 entries, indexed by the
/// integer degree angle of the reading. Slots the decoder could not fill
/// for a revolution keep their default values (0.0 m, intensity 0).
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Scan {
    /// Distance to an object at each degree (in meters).
    pub ranges: Vec<f64>,
    /// Return strength of the laser pulse at each degree.
    pub intensities: Vec<u16>,
    /// Angle of the first sample in radian.
    pub angle_min: f64,
    /// Angle of the last sample in radian.
    pub angle_max: f64,
    /// Angular distance between samples in radian.
    pub angle_increment: f64,
    /// Time between samples in seconds.
    pub time_increment: f64,
    /// Time for one full revolution in seconds.
    pub scan_time: f64,
    /// Minimum measurable distance in meters.
    pub range_min: f64,
    /// Maximum measurable distance in meters.
    pub range_max: f64,
}
