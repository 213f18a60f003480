//! Typed path parameter helpers.

use std::str::FromStr;

use retrolog_core::error::AppError;

/// Parses an integer id from a path segment.
pub fn parse_id<T: FromStr>(s: &str) -> Result<T, AppError> {
    s.parse::<T>()
        .map_err(|_| AppError::validation(format!("Invalid id: {s}")))
}

#[cfg(test)]
mod tests {
    use retrolog_core::types::PostId;

    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id::<PostId>("42").unwrap(), PostId::new(42));
        assert!(parse_id::<PostId>("abc").is_err());
    }
}
