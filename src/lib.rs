//! Builds GPSBabel command lines for importing and exporting GPS data.
//!
//! Formats either follow babel's file format convention (`ConventionFormat`)
//! or carry explicit per-operation command templates (`TemplateFormat`).
//! Building a command never runs anything; an empty command means the
//! operation is not supported.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

pub mod capability;
pub mod error;
pub mod feature;
pub mod format;

pub use crate::capability::Capabilities;
pub use crate::error::{Error, Result};
pub use crate::feature::{Direction, FeatureType};
pub use crate::format::{
    BabelFormat, ConventionFormat, TemplateFormat, TemplateFormatBuilder,
};
