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

use std::sync::LazyLock;

use regex::Regex;

use super::{
    config::ClassifierConfig,
    errors::{ConfigError, InvalidRegexError},
    helper_constants::WELL_FORMED_NUMBER,
};
use crate::regex_util::RegexFullMatch;

static WELL_FORMED_NUMBER_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WELL_FORMED_NUMBER).expect("Invalid constant pattern!"));

/// Checks the normalized number has the shape of a phone number: a lone
/// `"0"`, or an optional `+`, a digit, at most 19 digits or separators, and
/// a final digit. ASCII digits only.
pub fn is_well_formed(number: &str) -> bool {
    WELL_FORMED_NUMBER_PATTERN.full_match(number)
}

/// Compiled form of the domestic shortcut of a [`ClassifierConfig`].
pub(super) struct ClassifierRegExps {
    /// `^(?:(?:N)|C(?:N))$` for national pattern N and calling code C.
    domestic_number_pattern: Regex,
    /// Source of `domestic_number_pattern`, reported as the matched pattern.
    domestic_number_pattern_text: String,
    /// `^(?:N)$`, tells a bare national number from a prefixed one.
    domestic_national_number_pattern: Regex,
    domestic_calling_code: String,
}

impl ClassifierRegExps {
    pub(super) fn new(config: &ClassifierConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let national = config.domestic_national_pattern();
        let calling_code = config.domestic_calling_code();
        let text = fast_cat::concat_str!(
            "^(?:(?:", national, ")|", calling_code, "(?:", national, "))$"
        );
        let domestic_number_pattern = Regex::new(&text).map_err(InvalidRegexError::from)?;
        let domestic_national_number_pattern =
            Regex::new(&fast_cat::concat_str!("^(?:", national, ")$"))
                .map_err(InvalidRegexError::from)?;
        Ok(Self {
            domestic_number_pattern,
            domestic_number_pattern_text: text,
            domestic_national_number_pattern,
            domestic_calling_code: calling_code.to_owned(),
        })
    }

    /// National part of a domestic number: the number itself, or the number
    /// without the domestic calling code. `None` for any other number.
    pub(super) fn domestic_national_part<'n>(&self, number: &'n str) -> Option<&'n str> {
        if self.domestic_national_number_pattern.full_match(number) {
            return Some(number);
        }
        if !self.domestic_number_pattern.full_match(number) {
            return None;
        }
        number.strip_prefix(self.domestic_calling_code.as_str())
    }

    #[cfg(test)]
    pub(super) fn is_domestic_number(&self, number: &str) -> bool {
        self.domestic_national_part(number).is_some()
    }

    pub(super) fn domestic_number_pattern_text(&self) -> &str {
        &self.domestic_number_pattern_text
    }
}

#[cfg(test)]
mod tests {
    use super::{ClassifierRegExps, is_well_formed};
    use crate::classifier::{config::ClassifierConfig, errors::ConfigError};

    #[test]
    fn well_formed_shapes() {
        assert!(is_well_formed("0"));
        assert!(is_well_formed("00"));
        assert!(is_well_formed("12"));
        assert!(is_well_formed("+12"));
        assert!(is_well_formed("1 2-3"));
        assert!(is_well_formed("123456789012345678901"));
    }

    #[test]
    fn malformed_shapes() {
        assert!(!is_well_formed(""));
        assert!(!is_well_formed("5"));
        assert!(!is_well_formed("abc"));
        assert!(!is_well_formed("12a"));
        assert!(!is_well_formed("++12"));
        assert!(!is_well_formed("12-"));
        assert!(!is_well_formed("1234567890123456789012"));
        // Arabic-Indic digits are not ASCII digits.
        assert!(!is_well_formed("\u{0665}\u{0665}"));
    }

    #[test]
    fn default_domestic_pattern() {
        let reg_exps = ClassifierRegExps::new(&ClassifierConfig::default()).unwrap();
        assert_eq!(
            reg_exps.domestic_number_pattern_text(),
            "^(?:(?:5[0-9]{8})|966(?:5[0-9]{8}))$"
        );
        assert!(reg_exps.is_domestic_number("512345678"));
        assert!(reg_exps.is_domestic_number("966512345678"));
        assert!(!reg_exps.is_domestic_number("412345678"));
        assert!(!reg_exps.is_domestic_number("5123456789"));
        assert!(!reg_exps.is_domestic_number("96651234567"));
        assert_eq!(reg_exps.domestic_national_part("966512345678"), Some("512345678"));
        assert_eq!(reg_exps.domestic_national_part("512345678"), Some("512345678"));
    }

    #[test]
    fn alternation_stays_inside_calling_code_prefix() {
        let config = ClassifierConfig::default().with_domestic_number("5[0-9]{8}|6[0-9]{8}");
        let reg_exps = ClassifierRegExps::new(&config).unwrap();
        assert_eq!(
            reg_exps.domestic_number_pattern_text(),
            "^(?:(?:5[0-9]{8}|6[0-9]{8})|966(?:5[0-9]{8}|6[0-9]{8}))$"
        );
        for number in ["512345678", "612345678", "966512345678", "966612345678"] {
            assert!(reg_exps.is_domestic_number(number), "{number}");
        }
        assert_eq!(reg_exps.domestic_national_part("966612345678"), Some("612345678"));
        assert!(!reg_exps.is_domestic_number("966712345678"));
        assert!(!reg_exps.is_domestic_number("9665123456781"));
    }

    #[test]
    fn bad_config_is_rejected() {
        let config = ClassifierConfig::default().with_domestic_calling_code("+966");
        assert!(matches!(ClassifierRegExps::new(&config), Err(ConfigError::InvalidCallingCode(_))));

        let config = ClassifierConfig::default().with_domestic_number("5(");
        assert!(matches!(ClassifierRegExps::new(&config), Err(ConfigError::InvalidPattern(_))));

        let config = ClassifierConfig::default().with_domestic_country_id("");
        assert_eq!(ClassifierRegExps::new(&config).err(), Some(ConfigError::MissingCountryId));
    }
}
