//! Field comparators shared by the column tables.
//!
//! All of them are total orders.

use std::cmp::Ordering;

use time::OffsetDateTime;

pub fn numeric(a: i64, b: i64) -> Ordering {
    a.cmp(&b)
}

/// Lexicographic order ignoring case. Strings differing only by case compare
/// equal.
pub fn case_insensitive(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

pub fn chronological(a: OffsetDateTime, b: OffsetDateTime) -> Ordering {
    a.cmp(&b)
}

/// Declaration order of an enum.
pub fn ordinal<E: Ord>(a: E, b: E) -> Ordering {
    a.cmp(&b)
}
