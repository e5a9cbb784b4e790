pub(crate) mod helper_constants;
mod helper_functions;
mod classifier_regexps;
mod classification;
mod config;
pub mod enums;
pub mod errors;
pub mod mobile_classifier;

pub use classification::{Classification, NumberMatch};
pub use classifier_regexps::is_well_formed;
pub use config::ClassifierConfig;
pub use enums::{ClassificationKind, InvalidReason};
pub use helper_functions::normalize;
pub use mobile_classifier::MobileClassifier;
