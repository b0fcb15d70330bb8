#[macro_use]
extern crate log;

mod bearing;
mod compile;
mod error;
mod export;
mod navigation;
mod options;
mod panel;
mod record;
pub mod segment;

pub use self::bearing::Bearings;
pub use self::compile::{compile_single, compile_total};
pub use self::error::RouteError;
pub use self::export::frame_to_geojson;
pub use self::navigation::{Direction, Mode, NavigationState};
pub use self::options::MapOptions;
pub use self::panel::{Frame, PanelEvent, RoutePanel, Summary};
pub use self::record::{format_timestamp, load_csv, load_json, Record, RouteSequence};
pub use self::segment::{RenderableSegment, SegmentKind};
