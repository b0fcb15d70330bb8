#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod actions;

use abstutil::{prettyprint_usize, Timer};
use anyhow::Result;
use structopt::StructOpt;

use route_model::{
    frame_to_geojson, load_csv, load_json, MapOptions, PanelEvent, Record, RoutePanel,
};

#[derive(StructOpt)]
struct Args {
    /// The path to a buffer of records, most recent first. JSON (an array, or an object with a
    /// `buffer` array) or CSV, judged by the file extension.
    #[structopt(long)]
    input: String,
    /// The path to JSON map options. Defaults are used if omitted.
    #[structopt(long)]
    options: Option<String>,
    /// Comma-separated navigation to replay: toggle, next, previous, scrub=N
    #[structopt(long, default_value = "")]
    actions: String,
    /// Write the final frame as GeoJSON here. Prints to stdout if omitted.
    #[structopt(long)]
    output: Option<String>,
}

impl Args {
    fn load_records(&self, timer: &mut Timer) -> Result<Vec<Record>> {
        timer.start("load records");
        let file = fs_err::File::open(&self.input)?;
        let records = if self.input.ends_with(".csv") {
            load_csv(file)?
        } else if self.input.ends_with(".json") {
            load_json(file)?
        } else {
            bail!("Don't know how to read {}; expected .json or .csv", self.input);
        };
        timer.stop("load records");
        Ok(records)
    }

    fn load_options(&self) -> Result<MapOptions> {
        match self.options {
            Some(ref path) => Ok(serde_json::from_reader(fs_err::File::open(path)?)?),
            None => Ok(MapOptions::default()),
        }
    }
}

fn main() -> Result<()> {
    abstutil::logger::setup();

    let args = Args::from_iter(abstutil::cli_args());
    let mut timer = Timer::new("replay route");

    let records = args.load_records(&mut timer)?;
    let options = args.load_options()?;
    let actions = actions::parse(&args.actions)?;

    let mut panel = RoutePanel::new();
    panel.handle(PanelEvent::DataReceived(records));
    info!(
        "Loaded {} records, making {} segments",
        prettyprint_usize(panel.route().len()),
        prettyprint_usize(panel.route().segment_count())
    );

    let extent = options.view_extent();
    let outside = panel
        .route()
        .records()
        .iter()
        .filter(|rec| !extent.contains(rec.actual()))
        .count();
    if outside > 0 {
        warn!(
            "{} records are outside the view around {:?}; the map can't pan to them",
            prettyprint_usize(outside),
            options.center()
        );
    }

    timer.start_iter("replay actions", actions.len());
    for action in actions {
        timer.next();
        let frame = panel.handle(action);
        if let Some(readout) = frame.summary.readout() {
            info!("{readout}");
        }
    }

    let gj = frame_to_geojson(panel.frame(), &options);
    let out = serde_json::to_string_pretty(&gj)?;
    match args.output {
        Some(path) => {
            fs_err::write(&path, out)?;
            info!("Wrote {path}");
        }
        None => println!("{out}"),
    }
    Ok(())
}
