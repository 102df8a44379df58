//! Custom error declarations and their extraction from Solidity source text.
//!
//! Extraction is a single regular expression, not a parser. Known limits:
//! - a declaration must sit on one line; parameters spread over several lines are not matched;
//! - a parameter list containing `)` (e.g. a function-typed parameter) is not matched as a whole;
//! - `error` inside comments or strings is matched like any other text.
use std::{collections::BTreeSet, fmt::Display};

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref ERROR_DECLARATION: Regex =
        Regex::new(r"error[ \t]+([A-Za-z_][A-Za-z0-9_]*)[ \t]*(\([^)\n]*\))?[ \t]*;").unwrap();
}

/// A custom error in canonical form: `error Name(params);` or `error Name;`.
///
/// Two errors are equal only if their canonical strings are equal, so the same
/// name with different parameter lists yields two distinct errors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomError(String);

impl CustomError {
    #[must_use]
    pub fn new(name: &str, params: Option<&str>) -> Self {
        CustomError(format!("error {name}{};", params.unwrap_or_default()))
    }
}

impl Display for CustomError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Finds every custom error declared in `source`.
///
/// Parameter lists are kept verbatim including their parentheses. Repeated
/// declarations within the same text collapse into one entry.
#[must_use]
pub fn extract_errors(source: &str) -> BTreeSet<CustomError> {
    ERROR_DECLARATION
        .captures_iter(source)
        .map(|caps| {
            let name = &caps[1];
            let params = caps.get(2).map(|m| m.as_str());
            CustomError::new(name, params)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(source: &str) -> Vec<String> {
        extract_errors(source)
            .into_iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn test_extract_with_parameters() {
        let source = r"
            contract Vault {
                error InsufficientBalance(uint256 required, uint256 available);
            }
        ";
        assert_eq!(
            extracted(source),
            vec!["error InsufficientBalance(uint256 required, uint256 available);"]
        );
    }

    #[test]
    fn test_extract_empty_and_missing_parameter_list() {
        let source = "error Unauthorized();\nerror Paused;\n";
        assert_eq!(
            extracted(source),
            vec!["error Paused;", "error Unauthorized();"]
        );
    }

    #[test]
    fn test_whitespace_around_parameter_list_is_dropped() {
        let source = "error\tSpaced  (address who) ;";
        assert_eq!(extracted(source), vec!["error Spaced(address who);"]);
    }

    #[test]
    fn test_duplicates_in_one_file_collapse() {
        let source = "error Dup(uint8 a);\nerror Dup(uint8 a);\nerror Dup(uint16 a);";
        assert_eq!(
            extracted(source),
            vec!["error Dup(uint16 a);", "error Dup(uint8 a);"]
        );
    }

    #[test]
    fn test_identifier_must_not_start_with_digit() {
        assert!(extract_errors("error 1Bad();").is_empty());
        assert_eq!(extracted("error _ok_1();"), vec!["error _ok_1();"]);
    }

    #[test]
    fn test_multi_line_declaration_is_not_matched() {
        let source = "error Split(\n    uint256 a,\n    uint256 b\n);\nerror OneLine();";
        assert_eq!(extracted(source), vec!["error OneLine();"]);
    }

    #[test]
    fn test_nested_parentheses_are_not_matched() {
        let source = "error Callback(function (uint256) external cb);";
        assert!(extract_errors(source).is_empty());
    }

    #[test]
    fn test_revert_statement_is_not_a_declaration() {
        let source = "revert InsufficientBalance(1, 2);\nrequire(ok, \"error\");";
        assert!(extract_errors(source).is_empty());
    }
}
