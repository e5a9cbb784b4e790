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

use crate::classifier::errors::{InvalidTerritoryError, MetadataLoadError};

/// Mobile numbering sub-record of a territory, as handed over by a metadata
/// loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileRecord {
    /// Text of the `national` possible lengths attribute, e.g. `"9"` or `"[8-10]"`.
    pub possible_lengths: String,
    pub national_number_pattern: String,
}

/// One territory of the metadata document, already parsed but not validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryRecord {
    pub id: String,
    pub country_code: String,
    pub mobile: Option<MobileRecord>,
}

impl TerritoryRecord {
    pub fn new(id: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            country_code: country_code.into(),
            mobile: None,
        }
    }

    pub fn with_mobile(
        mut self,
        national_number_pattern: impl Into<String>,
        possible_lengths: impl Into<String>,
    ) -> Self {
        self.mobile = Some(MobileRecord {
            possible_lengths: possible_lengths.into(),
            national_number_pattern: national_number_pattern.into(),
        });
        self
    }
}

/// Mobile rule of a country: a pattern over the local part (not anchored
/// unless the pattern anchors itself) and the accepted lengths text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberRule {
    pattern: String,
    possible_lengths: String,
}

impl NumberRule {
    /// ASCII whitespace inside the pattern is dropped, metadata documents
    /// wrap long patterns over several lines.
    pub fn new(pattern: &str, possible_lengths: impl Into<String>) -> Self {
        Self {
            pattern: pattern.chars().filter(|c| !c.is_ascii_whitespace()).collect(),
            possible_lengths: possible_lengths.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn possible_lengths(&self) -> &str {
        &self.possible_lengths
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRule {
    id: String,
    calling_code: String,
    mobile_rule: Option<NumberRule>,
}

impl CountryRule {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    /// `None` when the country defines no mobile numbering.
    pub fn mobile_rule(&self) -> Option<&NumberRule> {
        self.mobile_rule.as_ref()
    }

    pub(crate) fn is_calling_code_prefix_of(&self, number: &str) -> bool {
        number.starts_with(self.calling_code.as_str())
    }
}

impl TryFrom<TerritoryRecord> for CountryRule {
    type Error = InvalidTerritoryError;

    fn try_from(record: TerritoryRecord) -> Result<Self, Self::Error> {
        let TerritoryRecord { id, country_code, mobile } = record;
        if id.is_empty() {
            return Err(InvalidTerritoryError::MissingId { country_code });
        }
        if country_code.is_empty() {
            return Err(InvalidTerritoryError::EmptyCallingCode { id });
        }
        if !country_code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidTerritoryError::NonDigitCallingCode { id, country_code });
        }
        let mobile_rule = mobile.map(|mobile| {
            NumberRule::new(&mobile.national_number_pattern, mobile.possible_lengths)
        });
        Ok(Self { id, calling_code: country_code, mobile_rule })
    }
}

/// Ordered, immutable collection of country rules. Order decides ties.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CountryTable {
    rules: Vec<CountryRule>,
}

impl CountryTable {
    /// Validates every record; one bad record fails the whole table.
    pub fn from_records(
        records: impl IntoIterator<Item = TerritoryRecord>,
    ) -> Result<Self, MetadataLoadError> {
        let rules = records
            .into_iter()
            .map(CountryRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[CountryRule] {
        &self.rules
    }

    pub fn get(&self, index: usize) -> Option<&CountryRule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rules whose calling code prefixes `number`, with their table index,
    /// in table order.
    pub fn rules_with_prefix_of<'a>(
        &'a self,
        number: &str,
    ) -> impl Iterator<Item = (usize, &'a CountryRule)> {
        self.rules
            .iter()
            .enumerate()
            .filter(move |(_, rule)| rule.is_calling_code_prefix_of(number))
    }

    /// First rule in table order whose calling code prefixes `number`.
    pub fn first_rule_with_prefix_of(&self, number: &str) -> Option<&CountryRule> {
        self.rules.iter().find(|rule| rule.is_calling_code_prefix_of(number))
    }
}

#[cfg(test)]
mod tests {
    use crate::classifier::errors::{InvalidTerritoryError, MetadataLoadError};

    use super::{CountryTable, NumberRule, TerritoryRecord};

    #[test]
    fn pattern_whitespace_is_removed() {
        let rule = NumberRule::new("1[0-25]\n            \\d{8}", "10");
        assert_eq!(rule.pattern(), "1[0-25]\\d{8}");
        assert_eq!(rule.possible_lengths(), "10");
    }

    #[test]
    fn non_ascii_whitespace_is_kept_in_pattern() {
        let rule = NumberRule::new("5\u{00A0}\\d{8}", "9");
        assert_eq!(rule.pattern(), "5\u{00A0}\\d{8}");
        let rule = NumberRule::new("5\u{2003} \t\\d", "2");
        assert_eq!(rule.pattern(), "5\u{2003}\\d");
    }

    #[test]
    fn table_keeps_order_and_optional_mobile() {
        let table = CountryTable::from_records([
            TerritoryRecord::new("US", "1").with_mobile("[2-9]\\d{9}", "10"),
            TerritoryRecord::new("AQ", "672"),
            TerritoryRecord::new("CA", "1").with_mobile("[2-9]\\d{9}", "10"),
        ])
        .unwrap();
        assert_eq!(table.len(), 3);
        assert!(table.get(1).unwrap().mobile_rule().is_none());

        let ids: Vec<_> = table
            .rules_with_prefix_of("15145550000")
            .map(|(index, rule)| (index, rule.id()))
            .collect();
        assert_eq!(ids, vec![(0, "US"), (2, "CA")]);
        assert_eq!(table.first_rule_with_prefix_of("15145550000").unwrap().id(), "US");
        assert!(table.first_rule_with_prefix_of("44").is_none());
    }

    #[test]
    fn invalid_records_fail_the_load() {
        assert_eq!(
            CountryTable::from_records([TerritoryRecord::new("XX", "")]),
            Err(MetadataLoadError::InvalidTerritory(
                InvalidTerritoryError::EmptyCallingCode { id: "XX".to_owned() }
            ))
        );
        assert_eq!(
            CountryTable::from_records([
                TerritoryRecord::new("SA", "966"),
                TerritoryRecord::new("XX", "+1"),
            ]),
            Err(MetadataLoadError::InvalidTerritory(
                InvalidTerritoryError::NonDigitCallingCode {
                    id: "XX".to_owned(),
                    country_code: "+1".to_owned(),
                }
            ))
        );
        assert!(matches!(
            CountryTable::from_records([TerritoryRecord::new("", "1")]),
            Err(MetadataLoadError::InvalidTerritory(InvalidTerritoryError::MissingId { .. }))
        ));
    }
}
