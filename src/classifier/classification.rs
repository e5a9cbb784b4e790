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

use super::enums::{ClassificationKind, InvalidReason};

/// Details of a successful classification. String fields other than the
/// canonical number are borrowed from the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberMatch<'a> {
    pub calling_code: &'a str,
    pub country_id: &'a str,
    pub matched_length: u32,
    pub matched_pattern: &'a str,
    /// Calling code prefixed digit string.
    pub canonical_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification<'a> {
    Local(NumberMatch<'a>),
    International(NumberMatch<'a>),
    Invalid(InvalidReason),
}

impl<'a> Classification<'a> {
    pub fn kind(&self) -> ClassificationKind {
        match self {
            Classification::Local(_) => ClassificationKind::Local,
            Classification::International(_) => ClassificationKind::International,
            Classification::Invalid(_) => ClassificationKind::Invalid,
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Classification::Invalid(_))
    }

    pub fn number_match(&self) -> Option<&NumberMatch<'a>> {
        match self {
            Classification::Local(number_match) | Classification::International(number_match) => {
                Some(number_match)
            }
            Classification::Invalid(_) => None,
        }
    }

    pub fn into_number_match(self) -> Option<NumberMatch<'a>> {
        match self {
            Classification::Local(number_match) | Classification::International(number_match) => {
                Some(number_match)
            }
            Classification::Invalid(_) => None,
        }
    }

    pub fn canonical_number(&self) -> Option<&str> {
        self.number_match().map(|m| m.canonical_number.as_str())
    }

    pub fn calling_code(&self) -> Option<&'a str> {
        self.number_match().map(|m| m.calling_code)
    }

    pub fn invalid_reason(&self) -> Option<InvalidReason> {
        match self {
            Classification::Invalid(reason) => Some(*reason),
            _ => None,
        }
    }
}
