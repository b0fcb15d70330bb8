use geom::{GPSBounds, LonLat};
use serde::{Deserialize, Serialize};

/// How far the view may pan from the center, in degrees.
const PAN_LIMIT_DEGREES: f64 = 0.02;

/// Map view settings. The engine never reads these; they're passed through to whatever draws the
/// map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    pub center_lat: f64,
    pub center_lon: f64,
    /// An optional extra tile layer drawn over the base map. Empty means none.
    pub tile_url: String,
    pub tile_other: String,
    pub zoom_level: f64,
    pub other_floor: usize,
    #[serde(rename = "showRadius")]
    pub show_radius: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center_lat: 48.262725,
            center_lon: 11.66725,
            tile_url: String::new(),
            tile_other: String::new(),
            zoom_level: 18.0,
            other_floor: 1,
            show_radius: true,
        }
    }
}

impl MapOptions {
    pub fn center(&self) -> LonLat {
        LonLat::new(self.center_lon, self.center_lat)
    }

    pub fn tile_url(&self) -> Option<&str> {
        if self.tile_url.is_empty() {
            None
        } else {
            Some(&self.tile_url)
        }
    }

    /// The view can't pan outside of this.
    pub fn view_extent(&self) -> GPSBounds {
        let mut gps_bounds = GPSBounds::new();
        gps_bounds.update(LonLat::new(
            self.center_lon - PAN_LIMIT_DEGREES,
            self.center_lat - PAN_LIMIT_DEGREES,
        ));
        gps_bounds.update(LonLat::new(
            self.center_lon + PAN_LIMIT_DEGREES,
            self.center_lat + PAN_LIMIT_DEGREES,
        ));
        gps_bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let options: MapOptions = serde_json::from_str(
            r#"{"zoom_level": 15, "tile_url": "https://tiles/{z}/{x}/{y}.png"}"#,
        )
        .unwrap();
        assert_eq!(options.zoom_level, 15.0);
        assert_eq!(options.tile_url(), Some("https://tiles/{z}/{x}/{y}.png"));
        assert_eq!(options.center_lat, 48.262725);
        assert!(options.show_radius);

        assert_eq!(MapOptions::default().tile_url(), None);
    }

    #[test]
    fn view_extent_around_center() {
        let options = MapOptions::default();
        let extent = options.view_extent();
        assert!(extent.contains(options.center()));
        assert!(extent.contains(LonLat::new(11.68, 48.27)));
        assert!(!extent.contains(LonLat::new(11.7, 48.262725)));
    }
}
