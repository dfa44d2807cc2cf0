use crate::capability::Capabilities;
use crate::feature::{Direction, FeatureType};

pub mod convention;
pub mod template;

pub use self::convention::ConventionFormat;
pub use self::template::{TemplateFormat, TemplateFormatBuilder};

/// The babel interchange format every conversion goes through.
pub const INTERCHANGE_FORMAT: &str = "gpx";

/// A GPS data format that GPSBabel can convert to or from.
///
/// Commands are returned as argv-style tokens. An empty command means the
/// format does not support the requested operation and must not be run.
pub trait BabelFormat {
    fn name(&self) -> &str;

    fn capabilities(&self) -> Capabilities;

    /// Command converting `input` in this format into GPX at `output`.
    fn import_command(
        &self,
        babel: &str,
        feature: FeatureType,
        input: &str,
        output: &str,
    ) -> Vec<String>;

    /// Command converting GPX at `input` into this format at `output`.
    fn export_command(
        &self,
        babel: &str,
        feature: FeatureType,
        input: &str,
        output: &str,
    ) -> Vec<String>;

    fn command(
        &self,
        direction: Direction,
        babel: &str,
        feature: FeatureType,
        input: &str,
        output: &str,
    ) -> Vec<String> {
        match direction {
            Direction::Import => self.import_command(babel, feature, input, output),
            Direction::Export => self.export_command(babel, feature, input, output),
        }
    }
}

/// Wraps a path in literal double quotes. The quotes are part of the
/// argument, not shell escaping.
pub(crate) fn quoted(path: &str) -> String {
    format!("\"{}\"", path)
}
