//! Natural ordering for file and directory names.
//!
//! Runs of ASCII digits compare by numeric value, everything else
//! compares character by character. `"note2"` sorts before `"note10"`.
//! Works on `char`s so multi-byte names never split mid-codepoint.

use std::cmp::Ordering;
use std::ffi::OsStr;
use std::iter::Peekable;
use std::str::Chars;

/// Compare two names in natural order
///
/// Digit runs that start at the same position in both names are
/// compared by value (leading zeros ignored). Names that are equal
/// under that rule, such as `"a01"` and `"a1"`, are ordered lexically
/// so the result is still a total order.
pub fn compare(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return a.cmp(b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) => {
                if l.is_ascii_digit() && r.is_ascii_digit() {
                    let ord = compare_digit_runs(&mut left, &mut right);
                    if ord != Ordering::Equal {
                        return ord;
                    }
                } else if l != r {
                    return l.cmp(&r);
                } else {
                    left.next();
                    right.next();
                }
            }
        }
    }
}

/// Compare two `OsStr` names, lossily converted to UTF-8
pub fn compare_os(a: &OsStr, b: &OsStr) -> Ordering {
    compare(&a.to_string_lossy(), &b.to_string_lossy())
}

/// Consume one digit run from each side and compare by value
fn compare_digit_runs(left: &mut Peekable<Chars<'_>>, right: &mut Peekable<Chars<'_>>) -> Ordering {
    let l = take_digits(left);
    let r = take_digits(right);
    let l = l.trim_start_matches('0');
    let r = r.trim_start_matches('0');

    // Without leading zeros, the longer run is the larger number
    l.len().cmp(&r.len()).then_with(|| l.cmp(r))
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(c) = chars.next_if(char::is_ascii_digit) {
        run.push(c);
    }
    run
}
