use serde::Serialize;

use crate::record::format_timestamp;
use crate::{
    compile_single, compile_total, Direction, Mode, NavigationState, Record, RenderableSegment,
    RouteSequence,
};

/// Something the operator or the data source did.
#[derive(Clone, Debug, PartialEq)]
pub enum PanelEvent {
    /// A new query result, most recent record first
    DataReceived(Vec<Record>),
    ToggleMode,
    Step(Direction),
    ScrubTo(usize),
}

/// Everything the renderer needs after one event. It's responsible for clearing whatever it drew
/// for the previous frame.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Frame {
    pub mode: Mode,
    pub segments: Vec<RenderableSegment>,
    pub summary: Summary,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub current_index: usize,
    pub total_segments: usize,
    pub mode: Mode,
    pub begin_timestamp: Option<i64>,
    pub end_timestamp: Option<i64>,
    pub can_step_previous: bool,
    pub can_step_next: bool,
    /// The slider's upper bound, when it should be shown at all
    pub scrub_max: Option<usize>,
}

impl Summary {
    fn new(route: &RouteSequence, nav: NavigationState) -> Self {
        let begin = route.get(nav.current_index);
        let end = match nav.mode {
            Mode::Total => route.last(),
            Mode::Single => route.get(nav.current_index + 1),
        };
        let scrub_max = match nav.mode {
            Mode::Total => None,
            Mode::Single => route.last_segment_index(),
        };
        Self {
            current_index: nav.current_index,
            total_segments: route.segment_count(),
            mode: nav.mode,
            begin_timestamp: begin.map(|r| r.timestamp),
            end_timestamp: end.map(|r| r.timestamp),
            can_step_previous: nav.can_step(Direction::Previous, route.len()),
            can_step_next: nav.can_step(Direction::Next, route.len()),
            scrub_max,
        }
    }

    /// Step buttons only do something while looking at a single segment.
    pub fn step_controls_enabled(&self) -> bool {
        self.mode == Mode::Single
    }

    /// Like "2 / 5 -- Begin: 4/3/2021, 05:06:07 -- End: 4/3/2021, 05:07:07". None if there's
    /// nothing to describe.
    pub fn readout(&self) -> Option<String> {
        if self.total_segments == 0 {
            return None;
        }
        let begin = self.begin_timestamp?;
        let end = self.end_timestamp?;
        Some(format!(
            "{} / {} -- Begin: {} -- End: {}",
            self.current_index + 1,
            self.total_segments,
            format_timestamp(begin),
            format_timestamp(end)
        ))
    }
}

/// Owns one displayed route and where the operator is in it. Every event produces a fresh frame;
/// nothing from a previous frame is patched.
pub struct RoutePanel {
    route: RouteSequence,
    nav: NavigationState,
    frame: Frame,
}

impl Default for RoutePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutePanel {
    pub fn new() -> Self {
        let route = RouteSequence::empty();
        let nav = NavigationState::initial();
        let frame = compile_frame(&route, nav);
        Self { route, nav, frame }
    }

    pub fn handle(&mut self, event: PanelEvent) -> &Frame {
        let nav = match event {
            PanelEvent::DataReceived(records) => {
                self.route = RouteSequence::from_upstream(records);
                debug!("New route with {} records", self.route.len());
                // Reset before anything else sees the new route
                self.nav.reset()
            }
            PanelEvent::ToggleMode => self.nav.toggle_mode(),
            PanelEvent::Step(dir) => self.nav.step(dir, self.route.len()),
            PanelEvent::ScrubTo(idx) => self.nav.scrub_to(idx, self.route.len()),
        };
        self.nav = nav;
        self.frame = compile_frame(&self.route, self.nav);
        &self.frame
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn navigation(&self) -> NavigationState {
        self.nav
    }

    pub fn route(&self) -> &RouteSequence {
        &self.route
    }
}

fn compile_frame(route: &RouteSequence, nav: NavigationState) -> Frame {
    let segments = match nav.mode {
        Mode::Total => compile_total(route),
        Mode::Single => match compile_single(route, nav.current_index) {
            Ok(segments) => segments,
            Err(err) => {
                error!("Navigation produced a bad index: {err}");
                debug_assert!(false, "{err}");
                Vec::new()
            }
        },
    };
    Frame {
        mode: nav.mode,
        segments,
        summary: Summary::new(route, nav),
    }
}
