use anyhow::Result;
use chrono::DateTime;
use geom::{GPSBounds, LonLat};
use serde::{Deserialize, Serialize};

/// One observation: where the device actually was, and where the model predicted it to be.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_pred: f64,
    pub longitude_pred: f64,
    /// Seconds since the epoch
    pub timestamp: i64,
    // Older payloads don't carry this; it's only used for display
    #[serde(default)]
    pub error: f64,
}

impl Record {
    pub fn actual(&self) -> LonLat {
        LonLat::new(self.longitude, self.latitude)
    }

    pub fn predicted(&self) -> LonLat {
        LonLat::new(self.longitude_pred, self.latitude_pred)
    }
}

/// Records in chronological order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RouteSequence {
    records: Vec<Record>,
}

impl RouteSequence {
    /// Records must already be in chronological order.
    pub fn new(records: Vec<Record>) -> Self {
        for pair in records.windows(2) {
            if pair[0].timestamp > pair[1].timestamp {
                warn!(
                    "Route input out-of-order: {} then {}",
                    pair[0].timestamp, pair[1].timestamp
                );
            }
        }
        Self { records }
    }

    /// Upstream delivers the most recent record first.
    pub fn from_upstream(mut records: Vec<Record>) -> Self {
        records.reverse();
        Self::new(records)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fewer than 2 records don't describe any movement.
    pub fn has_segments(&self) -> bool {
        self.records.len() >= 2
    }

    pub fn segment_count(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    /// The largest valid segment index, if there are any segments.
    pub fn last_segment_index(&self) -> Option<usize> {
        self.records.len().checked_sub(2)
    }

    pub fn get(&self, idx: usize) -> Option<&Record> {
        self.records.get(idx)
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn last(&self) -> Option<&Record> {
        self.records.last()
    }

    /// Covers both the actual and predicted tracks.
    pub fn gps_bounds(&self) -> GPSBounds {
        let mut gps_bounds = GPSBounds::new();
        for rec in &self.records {
            gps_bounds.update(rec.actual());
            gps_bounds.update(rec.predicted());
        }
        gps_bounds
    }
}

/// Reads a buffer of records, most recent first. Either a bare JSON array, or an object with a
/// `buffer` field, like the dashboard's data frame.
pub fn load_json<R: std::io::Read>(reader: R) -> Result<Vec<Record>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Payload {
        Bare(Vec<Record>),
        Framed { buffer: Vec<Record> },
    }

    let records = match serde_json::from_reader(reader)? {
        Payload::Bare(records) => records,
        Payload::Framed { buffer } => buffer,
    };
    Ok(records)
}

/// Reads a CSV buffer of records, most recent first, with the field names as headers.
pub fn load_csv<R: std::io::Read>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for rec in csv::Reader::from_reader(reader).deserialize() {
        let rec: Record = rec?;
        records.push(rec);
    }
    Ok(records)
}

/// Like "19/10/2026, 14:03:05", in UTC.
pub fn format_timestamp(timestamp: i64) -> String {
    match DateTime::from_timestamp(timestamp, 0) {
        Some(datetime) => datetime.format("%-d/%-m/%Y, %H:%M:%S").to_string(),
        None => format!("{timestamp}s"),
    }
}

#[cfg(test)]
pub(crate) fn rec(
    lat: f64,
    lon: f64,
    lat_pred: f64,
    lon_pred: f64,
    timestamp: i64,
    error: f64,
) -> Record {
    Record {
        latitude: lat,
        longitude: lon,
        latitude_pred: lat_pred,
        longitude_pred: lon_pred,
        timestamp,
        error,
    }
}
