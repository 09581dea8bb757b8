// src/sort.rs
//
// Sort-order checks over one extracted column.
//
// Only adjacent pairs are compared. Text is compared after `alnum_lower`, the
// same folding a rendered grid applies when it sorts. Equal neighbours never
// count against either direction.

use std::cmp::Ordering;

use crate::core::sanitize::alnum_lower;
use crate::dates::host::parse_value;
use crate::error::DateError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    fn allows(self, ord: Ordering) -> bool {
        match self {
            SortDirection::Ascending => ord != Ordering::Greater,
            SortDirection::Descending => ord != Ordering::Less,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Text,
    Date,
}

/// Index `i` of the first pair `(i, i + 1)` out of order, if any.
fn first_violation_by<T: Ord>(keys: &[T], dir: SortDirection) -> Option<usize> {
    keys.windows(2).position(|w| !dir.allows(w[0].cmp(&w[1])))
}

pub fn first_text_violation<S: AsRef<str>>(values: &[S], dir: SortDirection) -> Option<usize> {
    let keys: Vec<String> = values.iter().map(|v| alnum_lower(v.as_ref())).collect();
    first_violation_by(&keys, dir)
}

/// Dates are read with the lenient host parser; any unreadable value is an error.
pub fn first_date_violation<S: AsRef<str>>(values: &[S], dir: SortDirection) -> Result<Option<usize>, DateError> {
    let keys = values
        .iter()
        .map(|v| parse_value(v.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(first_violation_by(&keys, dir))
}

pub fn is_ascending<S: AsRef<str>>(values: &[S]) -> bool {
    first_text_violation(values, SortDirection::Ascending).is_none()
}

pub fn is_descending<S: AsRef<str>>(values: &[S]) -> bool {
    first_text_violation(values, SortDirection::Descending).is_none()
}

pub fn is_ascending_dates<S: AsRef<str>>(values: &[S]) -> Result<bool, DateError> {
    Ok(first_date_violation(values, SortDirection::Ascending)?.is_none())
}

pub fn is_descending_dates<S: AsRef<str>>(values: &[S]) -> Result<bool, DateError> {
    Ok(first_date_violation(values, SortDirection::Descending)?.is_none())
}

/// One entry point for callers that pick kind and direction at runtime.
pub fn check_order<S: AsRef<str>>(values: &[S], kind: ColumnKind, dir: SortDirection) -> Result<Option<usize>, DateError> {
    match kind {
        ColumnKind::Text => Ok(first_text_violation(values, dir)),
        ColumnKind::Date => first_date_violation(values, dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_order_ignores_case_and_punctuation() {
        assert!(is_ascending(&["alpha", "Beta", "b-eta", "GAMMA"]));
        assert!(is_descending(&["Zeta", "o'neil", "Oneil", "alpha"]));
        assert!(!is_ascending(&["beta", "alpha"]));
        assert_eq!(first_text_violation(&["a", "b", "a"], SortDirection::Ascending), Some(1));
    }

    #[test]
    fn equal_neighbours_are_neutral() {
        let xs = ["x", "X", "x."];
        assert!(is_ascending(&xs) && is_descending(&xs));
        let empty: [&str; 0] = [];
        assert!(is_ascending(&empty) && is_descending(&empty));
        assert!(is_ascending(&["only"]));
    }

    #[test]
    fn dates_compare_chronologically() {
        let xs = ["12/31/2025", "2026-01-08T09:00:00", "01/09/2026"];
        assert!(is_ascending_dates(&xs).unwrap());
        assert!(!is_descending_dates(&xs).unwrap());
        // text order would say otherwise
        assert!(!is_ascending(&xs));
    }

    #[test]
    fn unreadable_date_is_an_error() {
        assert!(is_ascending_dates(&["01/07/2026", "tomorrow"]).is_err());
        assert!(check_order(&["n/a"], ColumnKind::Date, SortDirection::Ascending).is_err());
        assert_eq!(check_order(&["b", "a"], ColumnKind::Text, SortDirection::Descending).unwrap(), None);
    }
}
