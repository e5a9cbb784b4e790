use crate::{classifier::errors::InvalidRegexError, metadata::NumberRule};

/// Internal matching API used to isolate the underlying implementation of
/// the mobile rule matcher and allow different implementations to be
/// swapped in easily.
pub(crate) trait MatcherApi: Send + Sync {
    /// Makes sure the rule's pattern is usable, so later matches can't fail.
    fn prepare_rule(&self, rule: &NumberRule) -> Result<(), InvalidRegexError>;

    /// Returns whether the rule's pattern matches anywhere in `local_part`.
    fn match_local_part(&self, local_part: &str, rule: &NumberRule) -> bool;
}
