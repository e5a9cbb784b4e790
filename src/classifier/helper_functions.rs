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

use std::borrow::Cow;

use crate::string_util::{remove_chars, strip_cow_prefix, trim_cow_leading_char};

use super::helper_constants::{MAX_STRIPPED_ZEROS, PLUS_SIGN, ZERO};

/// Whitespace in the PCRE sense (ASCII only) and hyphens.
fn is_separator(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r' | '-')
}

/// Removes whitespace and hyphens anywhere in the number, then strips a
/// single leading `+`, or otherwise one or two leading zeros.
///
/// Never fails; the result may be empty. Nothing is allocated when the input
/// contains no separators.
pub fn normalize(raw: &str) -> Cow<'_, str> {
    let cleaned = remove_chars(raw, is_separator);
    if cleaned.starts_with(PLUS_SIGN) {
        // checked above, stripping can't fail
        return strip_cow_prefix(cleaned, PLUS_SIGN).unwrap_or_default();
    }
    trim_cow_leading_char(cleaned, ZERO, MAX_STRIPPED_ZEROS)
}

/// Number as the presentation layer shows a domestic match: with the
/// domestic calling code in front, added only when missing.
pub(super) fn prefix_with_calling_code(number: &str, calling_code: &str) -> String {
    if number.starts_with(calling_code) {
        return number.to_owned();
    }
    fast_cat::concat_str!(calling_code, number)
}
