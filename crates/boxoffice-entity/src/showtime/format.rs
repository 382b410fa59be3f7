//! Screen format enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Projection format a showtime is presented in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScreenFormat {
    /// Standard 2D projection.
    #[serde(rename = "2D")]
    TwoD,
    /// Stereoscopic 3D.
    #[serde(rename = "3D")]
    ThreeD,
    /// IMAX large format.
    #[serde(rename = "IMAX")]
    Imax,
    /// 4DX motion seats.
    #[serde(rename = "4DX")]
    FourDx,
}

/// Error produced when parsing an unknown screen format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown screen format '{0}'")]
pub struct ParseScreenFormatError(String);

impl ScreenFormat {
    /// Return the format's display label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TwoD => "2D",
            Self::ThreeD => "3D",
            Self::Imax => "IMAX",
            Self::FourDx => "4DX",
        }
    }
}

impl fmt::Display for ScreenFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScreenFormat {
    type Err = ParseScreenFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "2D" => Ok(Self::TwoD),
            "3D" => Ok(Self::ThreeD),
            "IMAX" => Ok(Self::Imax),
            "4DX" => Ok(Self::FourDx),
            _ => Err(ParseScreenFormatError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("imax".parse::<ScreenFormat>(), Ok(ScreenFormat::Imax));
        assert_eq!("4dx".parse::<ScreenFormat>(), Ok(ScreenFormat::FourDx));
        assert!("70mm".parse::<ScreenFormat>().is_err());
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&ScreenFormat::Imax).expect("serialize");
        assert_eq!(json, "\"IMAX\"");
        let parsed: ScreenFormat = serde_json::from_str("\"2D\"").expect("deserialize");
        assert_eq!(parsed, ScreenFormat::TwoD);
    }
}
