/// Default home country of the domestic shortcut.
pub const DOMESTIC_COUNTRY_ID: &str = "SA";
pub const DOMESTIC_CALLING_CODE: &str = "966";
// Saudi mobile numbers: 9 digits starting with 5. ASCII digits only.
pub const DOMESTIC_NATIONAL_PATTERN: &str = "5[0-9]{8}";

pub const PLUS_SIGN: &str = "+";
pub const ZERO: char = '0';
/// At most this many leading zeros are stripped by normalization.
pub const MAX_STRIPPED_ZEROS: usize = 2;

// Either a lone "0", or an optional plus, a digit, up to 19 digits or
// separators, and a final digit. `\s` is PCRE-style ASCII whitespace.
pub const WELL_FORMED_NUMBER: &str = r"^(?:0|\+?[0-9][0-9\t\n\x0B\x0C\r -]{0,19}[0-9])$";

/// Longest string the well formed pattern accepts, so also the longest local part.
pub const MAX_WELL_FORMED_LENGTH: u32 = 21;
