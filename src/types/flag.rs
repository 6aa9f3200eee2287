//! Boolean flag decoding.

use crate::error::DocumentError;

/// Decode a boolean element's text.
///
/// Only the exact literals `true` and `false` are accepted; anything else,
/// including differently-cased or padded values, is an error.
pub fn parse_flag(element: &str, value: &str) -> Result<bool, DocumentError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(DocumentError::InvalidFlag {
            element: element.to_string(),
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_literals() {
        assert_eq!(parse_flag("disable", "true"), Ok(true));
        assert_eq!(parse_flag("disable", "false"), Ok(false));
    }

    #[test]
    fn test_rejects_everything_else() {
        for value in ["True", "FALSE", " true", "1", "0", "yes", ""] {
            let err = parse_flag("isRandom", value).unwrap_err();
            assert_eq!(
                err,
                DocumentError::InvalidFlag {
                    element: "isRandom".to_string(),
                    value: value.to_string(),
                }
            );
        }
    }
}
