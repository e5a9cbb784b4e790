// Copyright (C) 2025 Kashin Vladislav (Rust adaptation author)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log::error;

use crate::{
    classifier::errors::InvalidRegexError, interfaces, metadata::NumberRule,
    regexp_cache::RegexCache,
};

pub struct RegexBasedMatcher {
    cache: RegexCache,
}

impl RegexBasedMatcher {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { cache: RegexCache::with_capacity(capacity) }
    }

    fn match_number(
        &self,
        local_part: &str,
        number_pattern: &str,
    ) -> Result<bool, InvalidRegexError> {
        let regexp = self.cache.get_regex(number_pattern)?;
        // Unanchored: a match anywhere in the local part is enough.
        Ok(regexp.is_match(local_part))
    }
}

impl interfaces::MatcherApi for RegexBasedMatcher {
    fn prepare_rule(&self, rule: &NumberRule) -> Result<(), InvalidRegexError> {
        self.cache.get_regex(rule.pattern()).map(|_| ())
    }

    fn match_local_part(&self, local_part: &str, rule: &NumberRule) -> bool {
        match self.match_number(local_part, rule.pattern()) {
            Ok(res) => res,
            Err(err) => {
                error!("Invalid regex! {}: {}", rule.pattern(), err);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::RegexBasedMatcher;
    use crate::{interfaces::MatcherApi, metadata::NumberRule};

    #[test]
    fn matches_anywhere_in_local_part() {
        let matcher = RegexBasedMatcher::with_capacity(4);
        let rule = NumberRule::new("12", "10");
        assert!(matcher.match_local_part("0000120000", &rule));
        assert!(!matcher.match_local_part("0000000000", &rule));
    }

    #[test]
    fn anchors_in_pattern_are_honoured() {
        let matcher = RegexBasedMatcher::with_capacity(4);
        let rule = NumberRule::new(r"^\d{10}$", "10");
        assert!(matcher.match_local_part("1234567890", &rule));
        assert!(!matcher.match_local_part("12345678901", &rule));
    }

    #[test]
    fn broken_pattern_never_matches() {
        let matcher = RegexBasedMatcher::with_capacity(4);
        let rule = NumberRule::new(r"5(\d", "9");
        assert!(matcher.prepare_rule(&rule).is_err());
        assert!(!matcher.match_local_part("512345678", &rule));
    }
}
