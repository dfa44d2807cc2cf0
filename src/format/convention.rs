use super::{quoted, BabelFormat, INTERCHANGE_FORMAT};
use crate::capability::Capabilities;
use crate::feature::FeatureType;

/// A file format babel knows by a single identifier, e.g. `shapefile`.
///
/// Only imports are modelled: the file is always converted to GPX. The
/// capabilities are informational and are not checked when building commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConventionFormat {
    format: String,
    capabilities: Capabilities,
}

impl ConventionFormat {
    /// `capabilities` should list the feature types the format can hold.
    /// `IMPORT` is always added.
    pub fn new<S, C>(format: S, capabilities: C) -> Self
    where
        S: Into<String>,
        C: Into<Capabilities>,
    {
        ConventionFormat {
            format: format.into(),
            capabilities: capabilities.into() | Capabilities::IMPORT,
        }
    }

    pub fn format(&self) -> &str {
        &self.format
    }
}

impl BabelFormat for ConventionFormat {
    fn name(&self) -> &str {
        &self.format
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
        vec![
            quoted(babel),
            feature.babel_flag().to_owned(),
            "-i".to_owned(),
            self.format.clone(),
            "-o".to_owned(),
            INTERCHANGE_FORMAT.to_owned(),
            quoted(input),
            quoted(output),
        ]
    }

    fn export_command(
        &self,
        _babel: &str,
        _feature: FeatureType,
        _input: &str,
        _output: &str,
    ) -> Vec<String> {
        Vec::new()
    }
}
