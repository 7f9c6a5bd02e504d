//! Array text parsing
//!
//! Turns user-entered text such as `"64, 34, 25 12;22"` into the values the
//! recorder sorts. Entries are separated by commas, semicolons or
//! whitespace; every entry must be a finite number.

use chumsky::prelude::*;
use tracing::{debug, trace, warn};

use super::SortError;

/// Characters accepted between entries
const SEPARATORS: &str = ", \t\n\r;";

/// Parse zero or more separator characters.
fn separators<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(SEPARATORS).repeated().ignored()
}

/// Split the input into raw entries paired with their byte offsets.
fn entries_parser<'src>() -> impl Parser<'src, &'src str, Vec<(&'src str, usize)>> {
    let entry = none_of(SEPARATORS)
        .repeated()
        .at_least(1)
        .to_slice()
        .map_with(|text: &'src str, e| {
            let span: SimpleSpan = e.span();
            (text, span.start)
        });

    separators()
        .ignore_then(entry.then_ignore(separators()).repeated().collect::<Vec<_>>())
        .then_ignore(end())
}

/// Parse array text into numbers
///
/// Empty or separator-only text yields an empty array.
///
/// # Example
/// ```rust
/// use sortscope::parse_input;
///
/// assert_eq!(parse_input("3, 1 2").unwrap(), vec![3.0, 1.0, 2.0]);
/// assert!(parse_input("3, x").is_err());
/// ```
pub fn parse_input(text: &str) -> Result<Vec<f64>, SortError> {
    trace!(input_len = text.len(), "Parsing array text");

    let entries = entries_parser()
        .parse(text)
        .into_result()
        .map_err(|_| SortError::invalid_input(text, 0))?;

    let mut values = Vec::with_capacity(entries.len());
    for (entry, position) in entries {
        match entry.parse::<f64>() {
            Ok(value) if value.is_finite() => values.push(value),
            _ => {
                warn!(entry, position, "Rejected array entry");
                return Err(SortError::invalid_input(entry, position));
            }
        }
    }

    debug!(count = values.len(), "Parsed array text");
    Ok(values)
}

/// Check that every value is a finite number
///
/// The reported position is the element index.
pub fn validate_values(values: &[f64]) -> Result<(), SortError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(SortError::invalid_input(values[index].to_string(), index)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_parser_offsets() {
        let entries = entries_parser().parse(" 5,  17;x").into_result().unwrap();
        assert_eq!(entries, vec![("5", 1), ("17", 5), ("x", 8)]);
    }

    #[test]
    fn test_parse_mixed_separators() {
        let values = parse_input("64, 34,25 12;22\n11\t90").unwrap();
        assert_eq!(values, vec![64.0, 34.0, 25.0, 12.0, 22.0, 11.0, 90.0]);
    }

    #[test]
    fn test_parse_decimals_and_negatives() {
        let values = parse_input("-1.5, 2e2, +3").unwrap();
        assert_eq!(values, vec![-1.5, 200.0, 3.0]);
    }

    #[test]
    fn test_parse_empty_and_blank() {
        assert!(parse_input("").unwrap().is_empty());
        assert!(parse_input("  , ;\n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_words() {
        let err = parse_input("1, two, 3").unwrap_err();
        assert_eq!(err, SortError::invalid_input("two", 3));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(parse_input("1, inf").is_err());
        assert!(parse_input("NaN").is_err());
        assert!(parse_input("-infinity, 2").is_err());
    }

    #[test]
    fn test_validate_values() {
        assert!(validate_values(&[]).is_ok());
        assert!(validate_values(&[1.0, -2.0]).is_ok());
        let err = validate_values(&[1.0, f64::NAN]).unwrap_err();
        assert!(matches!(err, SortError::InvalidInput { position: 1, .. }));
    }
}
