//! Pure per-field predicates for certificate input.
//!
//! Each predicate is deterministic and side-effect free: it answers whether a
//! line of prompt input is acceptable for its field, and nothing else. Parse
//! failures of any kind (bad date format, non-numeric year) count as plain
//! rejection, never as an error.

use chrono::NaiveDate;
use once_cell::sync::Lazy;

/// Branch codes accepted on a certificate, matched exactly (case-sensitive).
pub const BRANCHES: [&str; 4] = ["CSE-AIML", "CSE", "CSE-DS", "CSE-CS"];

/// Entered dates use day/month/four-digit-year.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// Earliest date a certificate may carry (inclusive).
static CUTOFF_DATE: Lazy<NaiveDate> =
    Lazy::new(|| NaiveDate::from_ymd_opt(2023, 9, 23).expect("cutoff is a valid calendar date"));

/// A name is non-empty and contains only ASCII letters, periods, and
/// whitespace.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '.' || c.is_whitespace())
}

/// Father's names follow the same charset rule as student names.
pub fn is_valid_fathers_name(name: &str) -> bool {
    is_valid_name(name)
}

/// The date must parse as dd/mm/yyyy and fall on or after the cutoff.
pub fn is_valid_date(date: &str) -> bool {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_or(false, |d| d >= *CUTOFF_DATE)
}

/// Years are all-digit strings in 1..=4.
pub fn is_valid_year(year: &str) -> bool {
    // The digit check comes first: str::parse would also accept a leading
    // sign, which the prompt must reject.
    all_ascii_digits(year) && year.parse::<u32>().map_or(false, |y| (1..=4).contains(&y))
}

/// Semesters are all-digit strings equal to 1 or 2.
pub fn is_valid_semester(semester: &str) -> bool {
    all_ascii_digits(semester) && semester.parse::<u32>().map_or(false, |s| s == 1 || s == 2)
}

/// Academic years look like `2023-24`: seven characters, one hyphen, a
/// four-digit start year and a two-digit end year. No numeric relationship
/// between the two parts is enforced.
pub fn is_valid_academic_year(academic_year: &str) -> bool {
    if academic_year.chars().count() != 7 {
        return false;
    }
    match academic_year.split_once('-') {
        Some((start, end)) => {
            start.len() == 4 && end.len() == 2 && all_ascii_digits(start) && all_ascii_digits(end)
        }
        None => false,
    }
}

/// Branches must match one of the fixed codes exactly.
pub fn is_valid_branch(branch: &str) -> bool {
    BRANCHES.contains(&branch)
}

fn all_ascii_digits(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}
