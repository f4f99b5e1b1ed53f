//! Type Conversions for TrophyError
//!
//! This module contains From trait implementations for converting
//! common error types into TrophyError.

use super::types::TrophyError;
use serde_json::error::Category;

#[cfg(feature = "reqwest")]
impl From<reqwest::Error> for TrophyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::TimeoutError(err.to_string())
        } else if err.is_builder() {
            Self::ConfigurationError(err.to_string())
        } else {
            Self::HttpError(err.to_string())
        }
    }
}

// Syntax errors mean the body is not JSON at all; data errors mean it is JSON
// that does not fit the record.
impl From<serde_json::Error> for TrophyError {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Data => Self::ParseError(err.to_string()),
            Category::Io | Category::Syntax | Category::Eof => Self::JsonError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_serde_json_syntax_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: TrophyError = json_err.into();
        assert!(matches!(err, TrophyError::JsonError(_)));
    }

    #[test]
    fn test_from_serde_json_eof_error() {
        let json_err = serde_json::from_str::<serde_json::Value>(r#"{"id": "#).unwrap_err();
        let err: TrophyError = json_err.into();
        assert!(matches!(err, TrophyError::JsonError(_)));
    }

    #[test]
    fn test_from_serde_json_data_error() {
        let json_err = serde_json::from_str::<Vec<u32>>(r#"{"id": 1}"#).unwrap_err();
        let err: TrophyError = json_err.into();
        assert!(matches!(err, TrophyError::ParseError(_)));
    }
}
