use custom_error::custom_error;

use crate::feature::{Direction, FeatureType};

pub type Result<T> = std::result::Result<T, Error>;

custom_error! {pub Error
    UnknownFeatureType{name: String} = "Unknown GPS feature type '{name}'",
    UnknownDirection{name: String} = "Unknown transfer direction '{name}'",
    UnknownCapability{name: String} = "Unknown babel format capability '{name}'",
    Builder{reason: String} = "Could not build format: {reason}",
    Unsupported{direction: Direction, feature: FeatureType} =
        "Format does not support {direction} of {feature}s"
}
