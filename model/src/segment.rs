use geom::LonLat;
use serde::Serialize;

use crate::{Bearings, Record};

pub const ACTUAL_COLOR: &str = "rgba(73,168,222)";
pub const PREDICTED_COLOR: &str = "rgba(255,176,0)";
pub const ERROR_COLOR: &str = "#666";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentKind {
    Actual,
    Predicted,
    /// Connects the actual and predicted position of one record
    Error,
}

impl SegmentKind {
    pub fn color(self) -> &'static str {
        match self {
            SegmentKind::Actual => ACTUAL_COLOR,
            SegmentKind::Predicted => PREDICTED_COLOR,
            SegmentKind::Error => ERROR_COLOR,
        }
    }

    /// The icon drawn at the end of a directional line. Error lines have none.
    pub fn arrow(self) -> Option<&'static str> {
        match self {
            SegmentKind::Actual => Some("arrow"),
            SegmentKind::Predicted => Some("arrow1"),
            SegmentKind::Error => None,
        }
    }
}

/// One line to draw. Plain data; how it's styled on screen is up to the renderer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RenderableSegment {
    pub kind: SegmentKind,
    pub from: LonLat,
    pub to: LonLat,
    pub color: &'static str,
    pub label: Option<String>,
    /// Rotation of the arrow marker at `to`, in radians. This is the negated bearing, since
    /// screen rotation runs clockwise.
    pub direction_angle: Option<f64>,
}

impl RenderableSegment {
    fn directional(kind: SegmentKind, from: LonLat, to: LonLat, bearing: f64) -> Self {
        Self {
            kind,
            from,
            to,
            color: kind.color(),
            label: None,
            direction_angle: Some(-bearing),
        }
    }

    fn labeled(mut self, label: String) -> Self {
        self.label = Some(label);
        self
    }

    pub fn geometry(&self) -> [LonLat; 2] {
        [self.from, self.to]
    }
}

/// The actual and predicted lines from `a` to `b`, both labeled with the elapsed seconds.
pub fn labeled_pair(a: &Record, b: &Record) -> [RenderableSegment; 2] {
    let bearings = Bearings::between(a, b);
    let elapsed = (b.timestamp - a.timestamp).to_string();
    [
        RenderableSegment::directional(SegmentKind::Actual, a.actual(), b.actual(), bearings.actual)
            .labeled(elapsed.clone()),
        RenderableSegment::directional(
            SegmentKind::Predicted,
            a.predicted(),
            b.predicted(),
            bearings.predicted,
        )
        .labeled(elapsed),
    ]
}

/// The unlabeled actual and predicted lines from `a` to `b`, plus the error line at `a`.
pub fn cumulative_triple(a: &Record, b: &Record) -> [RenderableSegment; 3] {
    let bearings = Bearings::between(a, b);
    [
        RenderableSegment::directional(
            SegmentKind::Actual,
            a.actual(),
            b.actual(),
            bearings.actual,
        ),
        RenderableSegment::directional(
            SegmentKind::Predicted,
            a.predicted(),
            b.predicted(),
            bearings.predicted,
        ),
        error_line(a),
    ]
}

/// From the actual to the predicted position, labeled with the error to two decimal places.
pub fn error_line(rec: &Record) -> RenderableSegment {
    RenderableSegment {
        kind: SegmentKind::Error,
        from: rec.actual(),
        to: rec.predicted(),
        color: ERROR_COLOR,
        label: Some(format!("{:.2}", rec.error)),
        direction_angle: None,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_4;

    use super::*;
    use crate::record::rec;

    #[test]
    fn labeled_pair_uses_elapsed_time() {
        let a = rec(0.0, 0.0, 0.1, 0.1, 100, 1.0);
        let b = rec(1.0, 1.0, 1.1, 1.1, 160, 0.5);
        let [actual, predicted] = labeled_pair(&a, &b);

        assert_eq!(actual.kind, SegmentKind::Actual);
        assert_eq!(actual.color, ACTUAL_COLOR);
        assert_eq!(actual.label.as_deref(), Some("60"));
        assert_eq!(actual.geometry(), [a.actual(), b.actual()]);
        assert!((actual.direction_angle.unwrap() + FRAC_PI_4).abs() < 1e-9);

        assert_eq!(predicted.kind, SegmentKind::Predicted);
        assert_eq!(predicted.color, PREDICTED_COLOR);
        assert_eq!(predicted.label.as_deref(), Some("60"));
        assert_eq!(predicted.geometry(), [a.predicted(), b.predicted()]);
    }

    #[test]
    fn cumulative_triple_has_no_elapsed_labels() {
        let a = rec(0.0, 0.0, 0.1, 0.1, 100, 1.0);
        let b = rec(1.0, 1.0, 1.1, 1.1, 160, 0.5);
        let [actual, predicted, error] = cumulative_triple(&a, &b);

        assert_eq!(actual.label, None);
        assert_eq!(predicted.label, None);
        assert!(actual.direction_angle.is_some());

        assert_eq!(error.kind, SegmentKind::Error);
        assert_eq!(error.color, ERROR_COLOR);
        assert_eq!(error.geometry(), [a.actual(), a.predicted()]);
        assert_eq!(error.label.as_deref(), Some("1.00"));
        assert_eq!(error.direction_angle, None);
    }

    #[test]
    fn error_labels_round_to_two_places() {
        assert_eq!(error_line(&rec(0.0, 0.0, 0.0, 0.0, 0, 2.0)).label.as_deref(), Some("2.00"));
        assert_eq!(error_line(&rec(0.0, 0.0, 0.0, 0.0, 0, 0.123)).label.as_deref(), Some("0.12"));
    }

    #[test]
    fn arrows_only_on_directional_lines() {
        assert_eq!(SegmentKind::Actual.arrow(), Some("arrow"));
        assert_eq!(SegmentKind::Predicted.arrow(), Some("arrow1"));
        assert_eq!(SegmentKind::Error.arrow(), None);
    }
}
