use jiff::civil::{Date, DateTime, Time};

use crate::{Error, Result};

pub const SUPPORTED_FORMATS: &str =
    "YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS, DD/MM/YYYY, MM/DD/YYYY, YYYYMMDD";

enum Pattern {
    Date(&'static str),
    DateTime(&'static str),
}

/// Trial order matters: `DD/MM/YYYY` is tried before `MM/DD/YYYY`, so `03/04/2023` is 3 April.
const PATTERNS: [Pattern; 5] = [
    Pattern::Date("%Y-%m-%d"),
    Pattern::DateTime("%Y-%m-%dT%H:%M:%S"),
    Pattern::Date("%d/%m/%Y"),
    Pattern::Date("%m/%d/%Y"),
    Pattern::Date("%Y%m%d"),
];

impl Pattern {
    fn parse(&self, text: &str) -> Option<DateTime> {
        match self {
            Pattern::Date(fmt) => Date::strptime(fmt, text)
                .ok()
                .map(|d| d.to_datetime(Time::midnight())),
            Pattern::DateTime(fmt) => DateTime::strptime(fmt, text).ok(),
        }
    }
}

/// Parse a user-supplied date.
///
/// Blank input is not an error: it means "no date", and callers fall back to the current time.
/// Date-only formats resolve to midnight.
pub fn parse_date(text: &str) -> Result<Option<DateTime>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if !unsigned(text) {
        return Err(Error::DateParse(text.to_string()));
    }

    PATTERNS
        .iter()
        .find_map(|pattern| pattern.parse(text))
        .map(Some)
        .ok_or_else(|| Error::DateParse(text.to_string()))
}

/// `%Y` would otherwise take a leading `+` or `-` as the sign of the year.
fn unsigned(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes[0].is_ascii_digit()
        && !text.contains('+')
        && bytes
            .windows(2)
            .all(|pair| pair[1] != b'-' || pair[0].is_ascii_digit())
}
