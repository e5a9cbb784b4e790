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

use std::{borrow::Cow, collections::HashSet, sync::Arc};

use dashmap::DashMap;
use log::{trace, warn};

use super::{
    classification::{Classification, NumberMatch},
    classifier_regexps::{ClassifierRegExps, is_well_formed},
    config::ClassifierConfig,
    enums::InvalidReason,
    errors::{ConfigError, SetupError},
    helper_functions::{normalize, prefix_with_calling_code},
};
use crate::{
    interfaces::MatcherApi,
    metadata::{
        CountryRule, CountryTable, MetadataSource, NumberRule, ParsedLengths,
        parse_possible_lengths,
    },
    regex_based_matcher::RegexBasedMatcher,
};

pub struct MobileClassifier {
    /// An API for matching local parts against mobile rules.
    matcher_api: Box<dyn MatcherApi>,

    /// Compiled domestic shortcut.
    reg_exps: ClassifierRegExps,

    config: ClassifierConfig,

    table: CountryTable,

    /// Table indices of rules whose mobile pattern did not compile. They are
    /// ignored for the lifetime of the classifier.
    skipped_rules: HashSet<usize>,

    /// Parsed possible lengths by table index, filled on first use.
    parsed_lengths: DashMap<usize, Arc<ParsedLengths>>,
}

impl MobileClassifier {
    /// Classifier for `table` with the default (Saudi) domestic numbering plan.
    pub fn new(table: CountryTable) -> Self {
        match Self::with_config(table, ClassifierConfig::default()) {
            Ok(classifier) => classifier,
            Err(err) => {
                let err_message = format!("Default classifier config is invalid: {:?}", err);
                log::error!("{}", err_message);
                panic!("{}", err_message);
            }
        }
    }

    pub fn with_config(table: CountryTable, config: ClassifierConfig) -> Result<Self, ConfigError> {
        let reg_exps = ClassifierRegExps::new(&config)?;
        let matcher_api = Box::new(RegexBasedMatcher::with_capacity(table.len()));

        let mut skipped_rules = HashSet::new();
        for (index, rule) in table.rules().iter().enumerate() {
            if let Some(mobile_rule) = rule.mobile_rule() {
                if let Err(err) = matcher_api.prepare_rule(mobile_rule) {
                    warn!("Skipping mobile rule of territory '{}': {}", rule.id(), err);
                    skipped_rules.insert(index);
                }
            }
        }

        Ok(Self {
            matcher_api,
            reg_exps,
            config,
            parsed_lengths: DashMap::with_capacity(table.len()),
            table,
            skipped_rules,
        })
    }

    pub fn from_source<S: MetadataSource + ?Sized>(source: &S) -> Result<Self, SetupError> {
        Self::from_source_with_config(source, ClassifierConfig::default())
    }

    pub fn from_source_with_config<S: MetadataSource + ?Sized>(
        source: &S,
        config: ClassifierConfig,
    ) -> Result<Self, SetupError> {
        let table = source.load()?;
        Ok(Self::with_config(table, config)?)
    }

    pub fn table(&self) -> &CountryTable {
        &self.table
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classifies a raw user input. Never fails: anything unrecognized is
    /// [`Classification::Invalid`].
    ///
    /// Steps, first success wins:
    /// 1. normalize and check the shape of the number;
    /// 2. the domestic shortcut, independent of the table;
    /// 3. every table rule whose calling code prefixes the number, in table
    ///    order, and each of its possible lengths in parsed order.
    pub fn classify(&self, raw: &str) -> Classification<'_> {
        let Some(number) = self.get_valid_number(raw) else {
            trace!("Number '{raw}' is malformed");
            return Classification::Invalid(InvalidReason::Malformed);
        };

        if let Some(number_match) = self.match_domestic_number(&number) {
            trace!("Number '{number}' is a domestic number");
            return Classification::Local(number_match);
        }
        self.match_international_number(&number)
    }

    fn match_domestic_number(&self, number: &str) -> Option<NumberMatch<'_>> {
        let national_part = self.reg_exps.domestic_national_part(number)?;
        let calling_code = self.config.domestic_calling_code();
        Some(NumberMatch {
            calling_code,
            country_id: self.config.domestic_country_id(),
            matched_length: national_part.len() as u32,
            matched_pattern: self.reg_exps.domestic_number_pattern_text(),
            canonical_number: prefix_with_calling_code(number, calling_code),
        })
    }

    fn match_international_number(&self, number: &str) -> Classification<'_> {
        // The local part always drops the first prefix match in table order,
        // also when a later candidate is the one that matches.
        let Some(first_rule) = self.table.first_rule_with_prefix_of(number) else {
            trace!("Number '{number}': no known calling code");
            return Classification::Invalid(InvalidReason::UnknownCallingCode);
        };
        let local_part = &number[first_rule.calling_code().len()..];

        for (index, rule) in self.table.rules_with_prefix_of(number) {
            let Some(mobile_rule) = rule.mobile_rule() else {
                continue;
            };
            if self.skipped_rules.contains(&index) {
                continue;
            }
            let lengths = self.get_parsed_lengths(index, mobile_rule);
            for length in lengths.iter() {
                if local_part.len() == length as usize
                    && self.matcher_api.match_local_part(local_part, mobile_rule)
                {
                    trace!(
                        "Number '{number}' matched mobile rule of '{}' with length {length}",
                        rule.id()
                    );
                    return Classification::International(NumberMatch {
                        calling_code: rule.calling_code(),
                        country_id: rule.id(),
                        matched_length: length,
                        matched_pattern: mobile_rule.pattern(),
                        canonical_number: number.to_owned(),
                    });
                }
            }
        }
        trace!("Number '{number}': no mobile rule matched local part '{local_part}'");
        Classification::Invalid(InvalidReason::NoMatchingRule)
    }

    /// Concurrent first calls may both parse; the first insert is kept and
    /// both results are equal anyway.
    fn get_parsed_lengths(&self, index: usize, rule: &NumberRule) -> Arc<ParsedLengths> {
        if let Some(lengths) = self.parsed_lengths.get(&index) {
            return lengths.value().clone();
        }
        let parsed = Arc::new(parse_possible_lengths(rule.possible_lengths()));
        self.parsed_lengths.entry(index).or_insert(parsed).value().clone()
    }

    /// The normalized number, if it is well formed.
    pub fn get_valid_number<'r>(&self, raw: &'r str) -> Option<Cow<'r, str>> {
        let number = normalize(raw);
        if is_well_formed(&number) {
            Some(number)
        } else {
            None
        }
    }

    /// Id of the first territory, in table order, whose calling code
    /// prefixes the number.
    pub fn get_country_id_for_number(&self, raw: &str) -> Option<&str> {
        let number = self.get_valid_number(raw)?;
        self.table.first_rule_with_prefix_of(&number).map(CountryRule::id)
    }

    /// Calling code that is stripped off the number to get its local part.
    pub fn get_calling_code_for_number(&self, raw: &str) -> Option<&str> {
        let number = self.get_valid_number(raw)?;
        self.table
            .first_rule_with_prefix_of(&number)
            .map(CountryRule::calling_code)
    }

    /// All territories whose calling code prefixes the number, in table order.
    pub fn get_candidate_territories(&self, raw: &str) -> Vec<&CountryRule> {
        let Some(number) = self.get_valid_number(raw) else {
            return Vec::new();
        };
        self.table
            .rules_with_prefix_of(&number)
            .map(|(_, rule)| rule)
            .collect()
    }

    /// Mobile patterns of the candidate territories, in table order.
    pub fn get_mobile_patterns_for_number(&self, raw: &str) -> Vec<&str> {
        self.get_candidate_territories(raw)
            .into_iter()
            .filter_map(CountryRule::mobile_rule)
            .map(NumberRule::pattern)
            .collect()
    }
}
