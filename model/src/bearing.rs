use crate::Record;

/// Direction of travel between two adjacent records, in radians, for both tracks. Measured
/// counter-clockwise from east, treating lon/lat as planar x/y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bearings {
    pub actual: f64,
    pub predicted: f64,
}

impl Bearings {
    /// Coincident points have a bearing of 0.
    pub fn between(a: &Record, b: &Record) -> Self {
        Self {
            actual: (b.latitude - a.latitude).atan2(b.longitude - a.longitude),
            predicted: (b.latitude_pred - a.latitude_pred)
                .atan2(b.longitude_pred - a.longitude_pred),
        }
    }
}
