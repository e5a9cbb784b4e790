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

use super::{
    errors::ConfigError,
    helper_constants::{DOMESTIC_CALLING_CODE, DOMESTIC_COUNTRY_ID, DOMESTIC_NATIONAL_PATTERN},
};

/// Describes the home numbering plan recognized by the domestic shortcut.
///
/// The default is Saudi Arabia: calling code `966`, mobile numbers of 9
/// digits starting with `5`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierConfig {
    pub(crate) domestic_country_id: String,
    pub(crate) domestic_calling_code: String,
    /// Unanchored pattern of a domestic national number, anchoring is added
    /// when the shortcut is compiled. The matched length of a domestic match
    /// is the length of the national part it matched.
    pub(crate) domestic_national_pattern: String,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            domestic_country_id: DOMESTIC_COUNTRY_ID.to_owned(),
            domestic_calling_code: DOMESTIC_CALLING_CODE.to_owned(),
            domestic_national_pattern: DOMESTIC_NATIONAL_PATTERN.to_owned(),
        }
    }
}

impl ClassifierConfig {
    pub fn with_domestic_country_id(mut self, id: impl Into<String>) -> Self {
        self.domestic_country_id = id.into();
        self
    }

    pub fn with_domestic_calling_code(mut self, calling_code: impl Into<String>) -> Self {
        self.domestic_calling_code = calling_code.into();
        self
    }

    /// Sets the national pattern; alternatives in it all accept the calling
    /// code in front.
    pub fn with_domestic_number(mut self, national_pattern: impl Into<String>) -> Self {
        self.domestic_national_pattern = national_pattern.into();
        self
    }

    pub fn domestic_country_id(&self) -> &str {
        &self.domestic_country_id
    }

    pub fn domestic_calling_code(&self) -> &str {
        &self.domestic_calling_code
    }

    pub fn domestic_national_pattern(&self) -> &str {
        &self.domestic_national_pattern
    }

    /// Pattern checks happen when the shortcut is compiled.
    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        if self.domestic_country_id.is_empty() {
            return Err(ConfigError::MissingCountryId);
        }
        let code = &self.domestic_calling_code;
        if code.is_empty() || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::InvalidCallingCode(code.clone()));
        }
        Ok(())
    }
}
