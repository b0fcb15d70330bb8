use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};

use crate::{Frame, MapOptions, Mode, RenderableSegment, SegmentKind};

/// Describes one frame as GeoJSON: a LineString per segment, with the styling and labels as
/// properties. The map options ride along on the collection for the renderer.
pub fn frame_to_geojson(frame: &Frame, options: &MapOptions) -> GeoJson {
    let features = frame.segments.iter().map(segment_to_feature).collect();

    let mut foreign_members = JsonObject::new();
    let mode = match frame.mode {
        Mode::Total => "total",
        Mode::Single => "single",
    };
    foreign_members.insert("mode".to_string(), mode.into());
    if let Some(readout) = frame.summary.readout() {
        foreign_members.insert("readout".to_string(), readout.into());
    }
    foreign_members.insert("center_lat".to_string(), options.center_lat.into());
    foreign_members.insert("center_lon".to_string(), options.center_lon.into());
    foreign_members.insert("zoom_level".to_string(), options.zoom_level.into());
    if let Some(url) = options.tile_url() {
        foreign_members.insert("tile_url".to_string(), url.into());
    }

    GeoJson::FeatureCollection(FeatureCollection {
        features,
        bbox: None,
        foreign_members: Some(foreign_members),
    })
}

fn segment_to_feature(segment: &RenderableSegment) -> Feature {
    let mut feature = Feature {
        bbox: None,
        geometry: Some(geojson::Geometry::new(geojson::Value::LineString(
            segment
                .geometry()
                .iter()
                .map(|pt| vec![pt.x(), pt.y()])
                .collect(),
        ))),
        id: None,
        properties: None,
        foreign_members: None,
    };
    let kind = match segment.kind {
        SegmentKind::Actual => "actual",
        SegmentKind::Predicted => "predicted",
        SegmentKind::Error => "error",
    };
    feature.set_property("kind", kind);
    feature.set_property("color", segment.color);
    if let Some(ref label) = segment.label {
        feature.set_property("label", label.clone());
    }
    if let Some(rotation) = segment.direction_angle {
        feature.set_property("rotation", rotation);
    }
    if let Some(arrow) = segment.kind.arrow() {
        feature.set_property("arrow", arrow);
    }
    feature
}
