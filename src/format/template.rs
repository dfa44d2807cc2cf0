use super::{quoted, BabelFormat};
use crate::capability::Capabilities;
use crate::error::{Error, Result};
use crate::feature::{Direction, FeatureType};

/// Replaced by the babel executable, unquoted.
pub const BABEL_PLACEHOLDER: &str = "%babel";
/// Replaced by the babel flag of the requested feature type.
pub const TYPE_PLACEHOLDER: &str = "%type";
/// Replaced by the quoted input path (the port when downloading from a device).
pub const INPUT_PLACEHOLDER: &str = "%in";
/// Replaced by the quoted output path (the port when uploading to a device).
pub const OUTPUT_PLACEHOLDER: &str = "%out";

/// A format driven by explicit command templates, one per direction and
/// feature type, such as a GPS device reached over a serial port.
///
/// An empty template means the operation is unsupported. The capabilities
/// are supplied separately and are not derived from the templates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Builder)]
#[builder(default, setter(into))]
pub struct TemplateFormat {
    name: String,
    capabilities: Capabilities,
    import_waypoint: String,
    export_waypoint: String,
    import_route: String,
    export_route: String,
    import_track: String,
    export_track: String,
}

impl TemplateFormat {
    pub fn new<S: Into<String>>(
        import_waypoint: S,
        export_waypoint: S,
        import_route: S,
        export_route: S,
        import_track: S,
        export_track: S,
    ) -> Self {
        TemplateFormat {
            import_waypoint: import_waypoint.into(),
            export_waypoint: export_waypoint.into(),
            import_route: import_route.into(),
            export_route: export_route.into(),
            import_track: import_track.into(),
            export_track: export_track.into(),
            ..Default::default()
        }
    }

    pub fn template(&self, direction: Direction, feature: FeatureType) -> &str {
        match (direction, feature) {
            (Direction::Import, FeatureType::Waypoint) => &self.import_waypoint,
            (Direction::Import, FeatureType::Route) => &self.import_route,
            (Direction::Import, FeatureType::Track) => &self.import_track,
            (Direction::Export, FeatureType::Waypoint) => &self.export_waypoint,
            (Direction::Export, FeatureType::Route) => &self.export_route,
            (Direction::Export, FeatureType::Track) => &self.export_track,
        }
    }

    fn expand(
        &self,
        direction: Direction,
        babel: &str,
        feature: FeatureType,
        input: &str,
        output: &str,
    ) -> Vec<String> {
        self.template(direction, feature)
            .split_whitespace()
            // Only whole tokens are placeholders, "-f=%in" is passed through as is
            .map(|token| match token {
                BABEL_PLACEHOLDER => babel.to_owned(),
                TYPE_PLACEHOLDER => feature.babel_flag().to_owned(),
                INPUT_PLACEHOLDER => quoted(input),
                OUTPUT_PLACEHOLDER => quoted(output),
                other => other.to_owned(),
            })
            .collect()
    }
}

impl TemplateFormatBuilder {
    /// `build`, reporting failure as a crate error.
    pub fn finish(&self) -> Result<TemplateFormat> {
        self.build().map_err(|reason| Error::Builder { reason })
    }
}

impl BabelFormat for TemplateFormat {
    fn name(&self) -> &str {
        &self.name
    }

    fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    fn import_command(
        &self,
        babel: &str,
        feature: FeatureType,
        input: &str,
        output: &str,
    ) -> Vec<String> {
        self.expand(Direction::Import, babel, feature, input, output)
    }

    fn export_command(
        &self,
        babel: &str,
        feature: FeatureType,
        input: &str,
        output: &str,
    ) -> Vec<String> {
        self.expand(Direction::Export, babel, feature, input, output)
    }
}
