//! Table search and sort rules.
//!
//! # Design
//! - Search is a case-insensitive substring match over a row's full text.
//! - Sort orders rows by a natural comparison of one column's trimmed text; numeric runs
//!   compare by value so "2" lands before "10".
//! - Sorting is stable in both directions, so ties keep their previous order.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Selector of body rows.
pub const BODY_ROW_SELECTOR: &str = "tbody tr";
/// Selector of sortable headers.
pub const SORTABLE_HEADER_SELECTOR: &str = "th[data-sortable]";
/// Closest ancestor holding the search form.
pub const CARD_SELECTOR: &str = ".card";
/// Search input inside the card.
pub const SEARCH_INPUT_SELECTOR: &str = ".search-form input";
/// Header class for an ascending sort.
pub const SORT_ASC_CLASS: &str = "sort-asc";
/// Header class for a descending sort.
pub const SORT_DESC_CLASS: &str = "sort-desc";

/// Sort direction for a column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Direction for a header click: descending only when the header is currently ascending.
    #[must_use]
    pub const fn after_click(currently_ascending: bool) -> Self {
        if currently_ascending {
            Self::Descending
        } else {
            Self::Ascending
        }
    }

    /// Indicator class for the header.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Ascending => SORT_ASC_CLASS,
            Self::Descending => SORT_DESC_CLASS,
        }
    }
}

/// Whether a row's text matches the search query (empty query matches everything).
#[must_use]
pub fn row_matches(row_text: &str, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    row_text.to_lowercase().contains(&query.to_lowercase())
}

/// Order in which rows should be re-appended, given each row's column text.
#[must_use]
pub fn sort_permutation<S: AsRef<str>>(keys: &[S], direction: SortDirection) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| {
        let cmp = natural_cmp(keys[a].as_ref().trim(), keys[b].as_ref().trim());
        match direction {
            SortDirection::Ascending => cmp,
            SortDirection::Descending => cmp.reverse(),
        }
    });
    order
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Other,
    Digit,
    Letter,
}

fn classify(ch: char) -> CharClass {
    if ch.is_ascii_digit() {
        CharClass::Digit
    } else if ch.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

/// Natural, case-insensitive comparison with numeric runs compared by value.
///
/// Strings that compare equal ignoring case are ordered lowercase first, then by code point.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    primary_cmp(a, b).then_with(|| case_cmp(a, b))
}

fn primary_cmp(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();
    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                let (lc, rc) = (classify(l), classify(r));
                if lc != rc {
                    return lc.cmp(&rc);
                }
                let ord = if lc == CharClass::Digit {
                    numeric_run_cmp(&mut left, &mut right)
                } else {
                    left.next();
                    right.next();
                    fold(l).cmp(&fold(r))
                };
                if ord != Ordering::Equal {
                    return ord;
                }
            }
        }
    }
}

fn numeric_run_cmp(left: &mut Peekable<Chars<'_>>, right: &mut Peekable<Chars<'_>>) -> Ordering {
    let l = take_digits(left);
    let r = take_digits(right);
    let l = l.trim_start_matches('0');
    let r = r.trim_start_matches('0');
    l.len().cmp(&r.len()).then_with(|| l.cmp(r))
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(ch) = chars.next_if(char::is_ascii_digit) {
        run.push(ch);
    }
    run
}

fn fold(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

fn case_cmp(a: &str, b: &str) -> Ordering {
    for (l, r) in a.chars().zip(b.chars()) {
        if l == r {
            continue;
        }
        if fold(l) == fold(r) {
            return if l.is_lowercase() {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        return l.cmp(&r);
    }
    a.len().cmp(&b.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted<'a>(keys: &[&'a str], direction: SortDirection) -> Vec<&'a str> {
        sort_permutation(keys, direction)
            .into_iter()
            .map(|idx| keys[idx])
            .collect()
    }

    #[test]
    fn numbers_sort_by_value() {
        assert_eq!(
            sorted(&["10", "2", "1"], SortDirection::Ascending),
            vec!["1", "2", "10"]
        );
        assert_eq!(natural_cmp("Form 2", "Form 10"), Ordering::Less);
    }

    #[test]
    fn descending_is_exact_reverse_without_ties() {
        let keys = ["Okafor", "adeyemi", "Mensah", "10", "9", "Boateng"];
        let asc = sorted(&keys, SortDirection::Ascending);
        let mut desc = sorted(&keys, SortDirection::Descending);
        desc.reverse();
        assert_eq!(asc, desc);
        assert_eq!(asc, vec!["9", "10", "adeyemi", "Boateng", "Mensah", "Okafor"]);
    }

    #[test]
    fn ties_keep_previous_order_in_both_directions() {
        let keys = ["b", " a", "a "];
        assert_eq!(sort_permutation(&keys, SortDirection::Ascending), vec![1, 2, 0]);
        assert_eq!(sort_permutation(&keys, SortDirection::Descending), vec![0, 1, 2]);
    }

    #[test]
    fn case_only_differences_put_lowercase_first() {
        assert_eq!(natural_cmp("abc", "ABC"), Ordering::Less);
        assert_eq!(natural_cmp("Abc", "abd"), Ordering::Less);
    }

    #[test]
    fn punctuation_before_digits_before_letters() {
        assert_eq!(natural_cmp("-", "1"), Ordering::Less);
        assert_eq!(natural_cmp("1", "a"), Ordering::Less);
        assert_eq!(natural_cmp("", "a"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_do_not_change_value_order() {
        assert_eq!(natural_cmp("007", "8"), Ordering::Less);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        assert!(row_matches("Kwame Mensah JSS 2", "mensah"));
        assert!(!row_matches("Kwame Mensah", "ama"));
        assert!(row_matches("anything", ""));
    }

    #[test]
    fn header_click_toggles_relative_to_current_state() {
        assert_eq!(SortDirection::after_click(false), SortDirection::Ascending);
        assert_eq!(SortDirection::after_click(true), SortDirection::Descending);
        assert_eq!(SortDirection::Descending.class(), "sort-desc");
    }
}
