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

use strum::{AsRefStr, Display, EnumIter};

/// The three outcomes of classifying a number.
///
/// String forms are lowercase: `"local"`, `"international"`, `"invalid"`.
#[derive(Debug, EnumIter, Display, AsRefStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "lowercase")]
pub enum ClassificationKind {
    /// **Domestic mobile number.**
    /// Recognized by the domestic shortcut, without consulting the country table.
    Local,
    /// **International mobile number.**
    /// Matched the mobile rule (length and pattern) of some country in the table.
    International,
    /// **Not a recognized mobile number.**
    /// Malformed input, unknown calling code or no matching rule.
    Invalid,
}

/// Why a number was classified as [`ClassificationKind::Invalid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// The normalized input does not have the shape of a phone number.
    Malformed,
    /// No calling code of the table is a prefix of the number.
    UnknownCallingCode,
    /// Some calling codes matched, but no mobile rule accepted the local part.
    NoMatchingRule,
}
