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

/// Strips prefix of given string Cow. Returns option with `Some` if
/// prefix found and stripped.
///
/// Calls `drain` if string is owned and returns slice if string is borrowed
pub fn strip_cow_prefix<'a>(cow: Cow<'a, str>, prefix: &str) -> Option<Cow<'a, str>> {
    match cow {
        Cow::Borrowed(s) => s.strip_prefix(prefix).map(Cow::Borrowed),
        Cow::Owned(mut s) => {
            if s.starts_with(prefix) {
                s.drain(0..prefix.len());
                return Some(Cow::Owned(s));
            }
            None
        }
    }
}

/// Strips up to `max` leading occurrences of `c`.
pub fn trim_cow_leading_char<'a>(cow: Cow<'a, str>, c: char, max: usize) -> Cow<'a, str> {
    let count = cow.chars().take(max).take_while(|ch| *ch == c).count();
    let bytes = count * c.len_utf8();
    match cow {
        Cow::Borrowed(s) => Cow::Borrowed(&s[bytes..]),
        Cow::Owned(mut s) => {
            s.drain(0..bytes);
            Cow::Owned(s)
        }
    }
}

/// Removes every char for which `is_separator` holds. Borrows the input
/// when there is nothing to remove.
pub fn remove_chars(s: &str, is_separator: impl Fn(char) -> bool) -> Cow<'_, str> {
    if !s.chars().any(&is_separator) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !is_separator(*c)).collect())
}
