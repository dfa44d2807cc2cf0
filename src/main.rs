#![deny(clippy::all)]
#![forbid(unsafe_code)]

use std::error::Error as StdError;

use itertools::Itertools;
use structopt::StructOpt;

use babel_format::{
    BabelFormat, Capabilities, ConventionFormat, Direction, Error, FeatureType, TemplateFormat,
    TemplateFormatBuilder,
};

#[derive(StructOpt)]
#[structopt(
    name = "babel_format",
    about = "Prints the GPSBabel command for a GPS data conversion"
)]
enum Args {
    /// Import a file format babel knows by name, e.g. shapefile
    #[structopt(name = "convention")]
    Convention {
        #[structopt(short = "b", long = "babel", default_value = "gpsbabel")]
        babel: String,
        #[structopt(short = "f", long = "format")]
        format: String,
        #[structopt(
            short = "c",
            long = "capabilities",
            default_value = "waypoints|routes|tracks"
        )]
        capabilities: Capabilities,
        #[structopt(short = "t", long = "type", default_value = "waypoint")]
        feature: FeatureType,
        #[structopt(name = "input")]
        input: String,
        #[structopt(name = "output")]
        output: String,
    },
    /// Expand a command template, e.g. "%babel %type -i garmin -o gpx %in %out"
    #[structopt(name = "template")]
    Template {
        #[structopt(short = "b", long = "babel", default_value = "gpsbabel")]
        babel: String,
        #[structopt(short = "d", long = "direction", default_value = "import")]
        direction: Direction,
        #[structopt(short = "t", long = "type", default_value = "waypoint")]
        feature: FeatureType,
        #[structopt(short = "T", long = "template")]
        template: String,
        #[structopt(name = "input")]
        input: String,
        #[structopt(name = "output")]
        output: String,
    },
}

/// A format holding `template` in the slot for `direction` and `feature` only.
fn template_format(
    direction: Direction,
    feature: FeatureType,
    template: String,
) -> babel_format::Result<TemplateFormat> {
    let mut builder = TemplateFormatBuilder::default();
    builder
        .name("template")
        .capabilities(Capabilities::from(direction) | Capabilities::from(feature));
    match (direction, feature) {
        (Direction::Import, FeatureType::Waypoint) => builder.import_waypoint(template),
        (Direction::Import, FeatureType::Route) => builder.import_route(template),
        (Direction::Import, FeatureType::Track) => builder.import_track(template),
        (Direction::Export, FeatureType::Waypoint) => builder.export_waypoint(template),
        (Direction::Export, FeatureType::Route) => builder.export_route(template),
        (Direction::Export, FeatureType::Track) => builder.export_track(template),
    };
    builder.finish()
}

/// The command to print, or `Error::Unsupported` when there is nothing to run.
fn build_command(
    format: &dyn BabelFormat,
    direction: Direction,
    babel: &str,
    feature: FeatureType,
    input: &str,
    output: &str,
) -> babel_format::Result<Vec<String>> {
    if !format.capabilities().supports(direction, feature) {
        eprintln!(
            "WARN: {} does not advertise {} of {}s ({})",
            format.name(),
            direction,
            feature,
            format.capabilities()
        );
    }

    let command = format.command(direction, babel, feature, input, output);
    if command.is_empty() {
        eprintln!("WARN: Nothing to run!");
        return Err(Error::Unsupported { direction, feature });
    }
    Ok(command)
}

fn main() -> Result<(), Box<dyn StdError>> {
    let command = match Args::from_args() {
        Args::Convention {
            babel,
            format,
            capabilities,
            feature,
            input,
            output,
        } => {
            let format = ConventionFormat::new(format, capabilities);
            build_command(&format, Direction::Import, &babel, feature, &input, &output)?
        }
        Args::Template {
            babel,
            direction,
            feature,
            template,
            input,
            output,
        } => {
            let format = template_format(direction, feature, template)?;
            build_command(&format, direction, &babel, feature, &input, &output)?
        }
    };

    println!("{}", command.iter().join(" "));
    Ok(())
}
