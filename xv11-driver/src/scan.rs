use crate::constants::{
    LEGACY_RANGE_MIN, N_ANGLES, ONE_DEGREE_RADIAN, PACKET_RANGE_MIN, RANGE_MAX,
};
use crate::numeric::range_meters;
use xv11_data::{Sample, Scan};

pub(crate) trait ScanFrame {
    fn legacy_frame() -> Scan;
    fn packet_frame() -> Scan;
    fn write_sample(&mut self, angle: usize, sample: &Sample);
}

impl ScanFrame for Scan {
    fn legacy_frame() -> Scan {
        Scan {
            ranges: vec![0.0; N_ANGLES],
            intensities: vec![0; N_ANGLES],
            angle_min: 0.0,
            angle_max: 2.0 * std::f64::consts::PI,
            angle_increment: ONE_DEGREE_RADIAN,
            time_increment: 0.0,
            scan_time: 0.0,
            range_min: LEGACY_RANGE_MIN,
            range_max: RANGE_MAX,
        }
    }

    fn packet_frame() -> Scan {
        Scan {
            ranges: vec![0.0; N_ANGLES],
            intensities: vec![0; N_ANGLES],
            angle_min: 0.0,
            // One degree short of a full turn, so angle 0 is not counted twice
            angle_max: 2.0 * std::f64::consts::PI - ONE_DEGREE_RADIAN,
            angle_increment: ONE_DEGREE_RADIAN,
            time_increment: 0.0,
            scan_time: 0.0,
            range_min: PACKET_RANGE_MIN,
            range_max: RANGE_MAX,
        }
    }

    fn write_sample(&mut self, angle: usize, sample: &Sample) {
        self.ranges[angle] = range_meters(sample.range_mm);
        self.intensities[angle] = sample.intensity;
    }
}
