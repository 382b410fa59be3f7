//! Compact seat codes of the form `A01`: one row letter, two-digit seat
//! number. Parsing is explicit and result-returning; malformed input is
//! an error value, never a panic or a silent fallback.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error produced when parsing a seat code fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeatIdParseError {
    /// The input was empty.
    #[error("seat code is empty")]
    Empty,
    /// The first character was not an ASCII row letter.
    #[error("seat code '{0}' does not start with a row letter")]
    BadRow(String),
    /// The remainder was not a seat number between 1 and 99.
    #[error("seat code '{0}' has an invalid seat number")]
    BadNumber(String),
}

/// Identity of one seat within a showtime's inventory.
///
/// Seats are identified by `(ShowtimeId, SeatId)`; the `SeatId` alone is
/// only meaningful relative to an inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatId {
    row: char,
    number: u8,
}

impl SeatId {
    /// Build a seat id from a row letter and seat number.
    ///
    /// The row is uppercased; numbers outside `1..=99` are rejected.
    pub fn new(row: char, number: u8) -> Result<Self, SeatIdParseError> {
        if !row.is_ascii_alphabetic() {
            return Err(SeatIdParseError::BadRow(format!("{row}{number}")));
        }
        if number == 0 || number > 99 {
            return Err(SeatIdParseError::BadNumber(format!("{row}{number}")));
        }
        Ok(Self {
            row: row.to_ascii_uppercase(),
            number,
        })
    }

    /// The row letter (`A`..).
    pub fn row(&self) -> char {
        self.row
    }

    /// The seat number within the row (1-based).
    pub fn number(&self) -> u8 {
        self.number
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.row, self.number)
    }
}

impl FromStr for SeatId {
    type Err = SeatIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let row = chars.next().ok_or(SeatIdParseError::Empty)?;
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(SeatIdParseError::BadNumber(s.to_string()));
        }
        let number: u8 = rest
            .parse()
            .map_err(|_| SeatIdParseError::BadNumber(s.to_string()))?;
        Self::new(row, number).map_err(|_| {
            if row.is_ascii_alphabetic() {
                SeatIdParseError::BadNumber(s.to_string())
            } else {
                SeatIdParseError::BadRow(s.to_string())
            }
        })
    }
}

impl Serialize for SeatId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let seat: SeatId = "A01".parse().expect("should parse");
        assert_eq!(seat.row(), 'A');
        assert_eq!(seat.number(), 1);
        assert_eq!(seat.to_string(), "A01");
    }

    #[test]
    fn test_lowercase_row_normalized() {
        let seat: SeatId = "b07".parse().expect("should parse");
        assert_eq!(seat.to_string(), "B07");
    }

    #[test]
    fn test_rejects_malformed_codes() {
        assert_eq!("".parse::<SeatId>(), Err(SeatIdParseError::Empty));
        assert!(matches!(
            "1A".parse::<SeatId>(),
            Err(SeatIdParseError::BadRow(_))
        ));
        assert!(matches!(
            "A".parse::<SeatId>(),
            Err(SeatIdParseError::BadNumber(_))
        ));
        assert!(matches!(
            "A00".parse::<SeatId>(),
            Err(SeatIdParseError::BadNumber(_))
        ));
    }

    #[test]
    fn test_ordering_is_row_major() {
        let a02: SeatId = "A02".parse().expect("parse");
        let a10: SeatId = "A10".parse().expect("parse");
        let b01: SeatId = "B01".parse().expect("parse");
        assert!(a02 < a10);
        assert!(a10 < b01);
    }

    #[test]
    fn test_serde_as_string() {
        let seat: SeatId = "C05".parse().expect("parse");
        let json = serde_json::to_string(&seat).expect("serialize");
        assert_eq!(json, "\"C05\"");
        let parsed: SeatId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, seat);
    }
}
