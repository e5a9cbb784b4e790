mod country_table;
mod possible_lengths;

pub use country_table::{CountryRule, CountryTable, MobileRecord, NumberRule, TerritoryRecord};
pub use possible_lengths::{ParsedLengths, parse_possible_lengths};

use crate::classifier::errors::MetadataLoadError;

/// Boundary to whatever reads the metadata document. Implementations parse
/// their source and hand over a validated table, or fail; a table is never
/// returned partially.
pub trait MetadataSource {
    fn load(&self) -> Result<CountryTable, MetadataLoadError>;
}

impl MetadataSource for [TerritoryRecord] {
    fn load(&self) -> Result<CountryTable, MetadataLoadError> {
        CountryTable::from_records(self.iter().cloned())
    }
}

impl MetadataSource for Vec<TerritoryRecord> {
    fn load(&self) -> Result<CountryTable, MetadataLoadError> {
        self.as_slice().load()
    }
}

impl MetadataSource for CountryTable {
    fn load(&self) -> Result<CountryTable, MetadataLoadError> {
        Ok(self.clone())
    }
}
