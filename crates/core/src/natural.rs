//! Natural-order string comparison for item names.

use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

/// Compare strings with embedded numbers ordered by numeric value, so
/// "Item2" sorts before "Item10". Case-insensitive, with a case-sensitive
/// comparison as the final tiebreak.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match natural_cmp_ci(a, b) {
        Ordering::Equal => a.cmp(b),
        ordering => ordering,
    }
}

fn natural_cmp_ci(a: &str, b: &str) -> Ordering {
    let mut chars_a = a.chars().peekable();
    let mut chars_b = b.chars().peekable();
    loop {
        match (chars_a.peek().copied(), chars_b.peek().copied()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => {
                if x.is_ascii_digit() && y.is_ascii_digit() {
                    let cmp = compare_digit_runs(&mut chars_a, &mut chars_b);
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                } else {
                    let cmp = x.to_lowercase().cmp(y.to_lowercase());
                    if cmp != Ordering::Equal {
                        return cmp;
                    }
                    chars_a.next();
                    chars_b.next();
                }
            }
        }
    }
}

/// Consume the digit run on both sides and compare the runs numerically.
/// Runs of equal value ("07" vs "7") compare equal here; the caller's
/// case-sensitive tiebreak settles them.
fn compare_digit_runs(a: &mut Peekable<Chars<'_>>, b: &mut Peekable<Chars<'_>>) -> Ordering {
    let run_a = take_digits(a);
    let run_b = take_digits(b);
    let digits_a = run_a.trim_start_matches('0');
    let digits_b = run_b.trim_start_matches('0');
    digits_a
        .len()
        .cmp(&digits_b.len())
        .then_with(|| digits_a.cmp(digits_b))
}

fn take_digits(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut run = String::new();
    while let Some(&c) = chars.peek() {
        if !c.is_ascii_digit() {
            break;
        }
        run.push(c);
        chars.next();
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_substrings_compare_by_value() {
        assert_eq!(natural_cmp("Item2", "Item10"), Ordering::Less);
        assert_eq!(natural_cmp("Item10", "Item2"), Ordering::Greater);
        assert_eq!(natural_cmp("Item2", "Item2"), Ordering::Equal);
    }

    #[test]
    fn case_insensitive_with_case_sensitive_tiebreak() {
        assert_eq!(natural_cmp("item2", "Item10"), Ordering::Less);
        assert_eq!(natural_cmp("Apple", "apple"), Ordering::Less);
        assert_eq!(natural_cmp("apple", "Banana"), Ordering::Less);
    }

    #[test]
    fn leading_zeros_compare_equal_numerically() {
        assert_eq!(natural_cmp("a07b", "a7b"), Ordering::Less);
        assert_eq!(natural_cmp("a07", "a8"), Ordering::Less);
    }

    #[test]
    fn prefix_orders_before_longer_string() {
        assert_eq!(natural_cmp("Iron", "Iron Ingot"), Ordering::Less);
    }
}
