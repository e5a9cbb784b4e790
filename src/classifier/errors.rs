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

use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
#[error("An error occurred while trying to create regex: {0}")]
pub struct InvalidRegexError(#[from] pub regex::Error);

/// Fatal setup failure: a classifier can not be built without a full table.
#[derive(Debug, PartialEq, Error)]
pub enum MetadataLoadError {
    #[error("Metadata source not found: {0}")]
    SourceMissing(String),
    #[error("Could not parse metadata source: {0}")]
    Unparsable(String),
    #[error("{0}")]
    InvalidTerritory(#[from] InvalidTerritoryError),
}

#[derive(Debug, PartialEq, Error)]
pub enum InvalidTerritoryError {
    #[error("Territory with calling code '{country_code}' has no id")]
    MissingId { country_code: String },
    #[error("Territory '{id}' has an empty calling code")]
    EmptyCallingCode { id: String },
    #[error("Territory '{id}' has a non-digit calling code '{country_code}'")]
    NonDigitCallingCode { id: String, country_code: String },
}

#[derive(Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("Domestic calling code must be non-empty digits, got '{0}'")]
    InvalidCallingCode(String),
    #[error("Domestic country id must not be empty")]
    MissingCountryId,
    #[error("Invalid domestic pattern: {0}")]
    InvalidPattern(#[from] InvalidRegexError),
}

/// Anything that prevents building a classifier from a metadata source.
#[derive(Debug, PartialEq, Error)]
pub enum SetupError {
    #[error("{0}")]
    Metadata(#[from] MetadataLoadError),
    #[error("{0}")]
    Config(#[from] ConfigError),
}
