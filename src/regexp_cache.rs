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

use std::sync::Arc;

use dashmap::DashMap;
use regex::Regex;

use crate::classifier::errors::InvalidRegexError;

/// Compiled patterns keyed by their source text. Entries are only ever
/// inserted, so a pattern compiles at most once per racing thread.
pub struct RegexCache {
    cache: DashMap<String, Arc<Regex>>,
}

impl RegexCache {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: DashMap::with_capacity(capacity),
        }
    }

    pub fn get_regex(&self, pattern: &str) -> Result<Arc<Regex>, InvalidRegexError> {
        if let Some(regex) = self.cache.get(pattern) {
            return Ok(regex.value().clone());
        }
        let entry = self
            .cache
            .entry(pattern.to_owned())
            .or_try_insert_with(|| Regex::new(pattern).map(Arc::new))?;
        Ok(entry.value().clone())
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::RegexCache;

    #[test]
    fn same_pattern_is_compiled_once() {
        let cache = RegexCache::with_capacity(4);
        let first = cache.get_regex(r"5\d{8}").unwrap();
        let second = cache.get_regex(r"5\d{8}").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn invalid_pattern_is_not_cached() {
        let cache = RegexCache::with_capacity(4);
        assert!(cache.get_regex("5(\\d").is_err());
        assert_eq!(cache.len(), 0);
    }
}
