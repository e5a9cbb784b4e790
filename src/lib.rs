mod interfaces;
mod classifier;
pub mod metadata;
mod regexp_cache;
mod regex_based_matcher;
pub(crate) mod regex_util;
pub(crate) mod string_util;


pub use classifier::{
    Classification, ClassificationKind, ClassifierConfig, InvalidReason, MobileClassifier,
    NumberMatch, errors, is_well_formed, normalize,
};
pub use metadata::{
    CountryRule, CountryTable, MetadataSource, NumberRule, ParsedLengths, TerritoryRecord,
    parse_possible_lengths,
};
