//! Parsing of comma-separated form input.
//!
//! Front ends collect each column as a single text field, e.g.
//! `"P1, P2, P3"` and `"0,1,2"`. These helpers turn that text into the
//! typed columns accepted by [`ProcessTable::from_columns`].
//!
//! [`ProcessTable::from_columns`]: crate::models::ProcessTable::from_columns

use std::str::FromStr;

use crate::error::{EngineError, Result};
use crate::models::{Process, ProcessTable};

/// Splits a comma-separated list into trimmed labels.
///
/// Empty text yields an empty list; empty items between commas are kept
/// so that validation can report them.
pub fn parse_list(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    text.split(',').map(|s| s.trim().to_string()).collect()
}

/// Parses a comma-separated list of integers.
///
/// # Errors
/// `EngineError::Parse` naming `field` and the first offending token.
pub fn parse_int_list<T: FromStr>(field: &str, text: &str) -> Result<Vec<T>> {
    parse_list(text)
        .into_iter()
        .map(|token| {
            token.parse::<T>().map_err(|_| EngineError::Parse {
                field: field.to_string(),
                token,
            })
        })
        .collect()
}

/// Parses a single integer such as a time quantum.
pub fn parse_int<T: FromStr>(field: &str, text: &str) -> Result<T> {
    let token = text.trim();
    token.parse::<T>().map_err(|_| EngineError::Parse {
        field: field.to_string(),
        token: token.to_string(),
    })
}

/// Parses the text columns of a process form into processes.
///
/// `priorities` is `None` for algorithms that ignore priority.
pub fn parse_processes(
    ids: &str,
    arrivals: &str,
    bursts: &str,
    priorities: Option<&str>,
) -> Result<Vec<Process>> {
    let ids = parse_list(ids);
    let arrivals: Vec<i64> = parse_int_list("arrival times", arrivals)?;
    let bursts: Vec<i64> = parse_int_list("burst times", bursts)?;
    let priorities: Option<Vec<i32>> = priorities
        .map(|text| parse_int_list("priorities", text))
        .transpose()?;

    ProcessTable::from_columns(&ids, &arrivals, &bursts, priorities.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_parse_list_trims() {
        assert_eq!(parse_list(" P1 ,P2,  P3"), vec!["P1", "P2", "P3"]);
        assert!(parse_list("   ").is_empty());
        assert_eq!(parse_list("a,,b"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_parse_int_list() {
        let values: Vec<i64> = parse_int_list("arrival times", "0, 1,2").unwrap();
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_parse_int_list_error_names_token() {
        let err = parse_int_list::<i64>("burst times", "5, x3, 2").unwrap_err();
        match err {
            EngineError::Parse { field, token } => {
                assert_eq!(field, "burst times");
                assert_eq!(token, "x3");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int::<i64>("quantum", " 4 ").unwrap(), 4);
        assert!(parse_int::<i64>("quantum", "four").is_err());
    }

    #[test]
    fn test_parse_processes() {
        let procs = parse_processes("P1,P2", "0,1", "5,3", Some("2,1")).unwrap();
        assert_eq!(procs[0], Process::new("P1", 0, 5).with_priority(2));
        assert_eq!(procs[1], Process::new("P2", 1, 3).with_priority(1));
    }

    #[test]
    fn test_parse_processes_length_mismatch() {
        let err = parse_processes("P1,P2,P3", "0,1", "5,3,2", None).unwrap_err();
        assert_eq!(
            err.validation_errors()[0].kind,
            ValidationErrorKind::LengthMismatch
        );
    }
}
