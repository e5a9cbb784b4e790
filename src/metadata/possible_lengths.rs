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

use log::debug;

use crate::classifier::helper_constants::MAX_WELL_FORMED_LENGTH;

/// Accepted local part lengths of a mobile rule, in the order they are tried.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedLengths(Vec<u32>);

impl ParsedLengths {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn contains(&self, length: u32) -> bool {
        self.0.contains(&length)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u32>> for ParsedLengths {
    fn from(value: Vec<u32>) -> Self {
        Self(value)
    }
}

/// Lenient integer coercion: leading whitespace and an optional sign are
/// skipped, then the leading ASCII digits are read. Anything else gives 0,
/// and so does a negative value.
fn coerce_length(segment: &str) -> u32 {
    let trimmed = segment.trim_start();
    let (negative, unsigned) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = unsigned
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..digits_end];

    if digits.is_empty() || negative {
        debug!("Length segment '{}' coerced to 0", segment);
        return 0;
    }
    // Overflowing values can never be a real length.
    digits.parse().unwrap_or(u32::MAX)
}

/// Parses the `possibleLengths` text of a mobile rule: `"9"`, `"8,9"` or
/// `"[8-10]"`.
///
/// With a hyphen present, the comma separated segments of the raw text are
/// coerced and kept first, then the inclusive `start..=end` range follows.
/// So `"[8-10]"` gives `[0, 8, 9, 10]` (the leading `"[8"` coerces to 0).
/// Without a hyphen every comma separated segment is coerced in order.
///
/// Never fails: malformed text degrades to zeros or an empty range.
pub fn parse_possible_lengths(spec: &str) -> ParsedLengths {
    let mut lengths: Vec<u32> = spec.split(',').map(coerce_length).collect();

    if spec.contains('-') {
        let range = spec.trim_matches(|c| c == '[' || c == ']');
        let mut bounds = range.split('-');
        let start = bounds.next().map(coerce_length).unwrap_or(0);
        let end = bounds.next().map(coerce_length).unwrap_or(0);
        // Lengths past the longest well formed number can never match.
        let end = end.min(MAX_WELL_FORMED_LENGTH);
        if start > end {
            debug!("Empty length range in '{}'", spec);
        }
        lengths.extend(start..=end);
    }

    ParsedLengths(lengths)
}
