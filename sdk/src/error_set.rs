use std::collections::BTreeSet;

use serde::Serialize;

use crate::custom_error::CustomError;

/// The union of custom errors collected across all scanned files.
///
/// Iteration yields errors in ascending order of their canonical string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorSet {
    errors: BTreeSet<CustomError>,
}

impl ErrorSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&mut self, other: impl IntoIterator<Item = CustomError>) {
        self.errors.extend(other);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl FromIterator<CustomError> for ErrorSet {
    fn from_iter<T: IntoIterator<Item = CustomError>>(iter: T) -> Self {
        ErrorSet {
            errors: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ErrorSet {
    type Item = &'a CustomError;
    type IntoIter = std::collections::btree_set::Iter<'a, CustomError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

/// Merges per-file extraction results into one set, deduplicated by canonical string.
pub fn aggregate<I, S>(per_file: I) -> ErrorSet
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = CustomError>,
{
    let mut set = ErrorSet::new();
    for errors in per_file {
        set.merge(errors);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom_error::extract_errors;

    #[test]
    fn test_aggregate_deduplicates_across_files() {
        let a = extract_errors("error InsufficientBalance(uint256 required, uint256 available);");
        let b = extract_errors(
            "error Unauthorized();\nerror InsufficientBalance(uint256 required, uint256 available);",
        );
        let set = aggregate([a, b]);
        let lines: Vec<_> = set.into_iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                "error InsufficientBalance(uint256 required, uint256 available);",
                "error Unauthorized();",
            ]
        );
    }

    #[test]
    fn test_aggregate_is_order_independent() {
        let a = extract_errors("error B();\nerror A(uint8 x);");
        let b = extract_errors("error C;\nerror A(uint8 x);");
        assert_eq!(
            aggregate([a.clone(), b.clone()]),
            aggregate([b, a])
        );
    }

    #[test]
    fn test_same_name_different_parameters_are_kept() {
        let set = aggregate([
            extract_errors("error Mismatch(uint256 a);"),
            extract_errors("error Mismatch(address a);"),
        ]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_aggregate_of_nothing_is_empty() {
        let set = aggregate(Vec::<Vec<CustomError>>::new());
        assert!(set.is_empty());
    }

    #[test]
    fn test_serializes_as_sorted_list() {
        let set: ErrorSet = [CustomError::new("Z", None), CustomError::new("A", Some("()"))]
            .into_iter()
            .collect();
        assert_eq!(
            serde_json::to_string(&set).unwrap(),
            r#"["error A();","error Z;"]"#
        );
    }
}
