//! Three-way comparators for string-like element references.
//!
//! Both comparators are generic over `AsRef<str>`, so they plug directly into
//! [`crate::quicksort::sort_by`] for `&str`, `String` or `Box<str>` sequences.

use core::cmp::Ordering;

/// Compares two strings byte by byte.
#[inline]
pub fn lexicographic<S>(a: &S, b: &S) -> Ordering
where
    S: AsRef<str> + ?Sized,
{
    a.as_ref().as_bytes().cmp(b.as_ref().as_bytes())
}

/// Compares two strings by their leading numeric value, see [`parse_leading_f64`].
///
/// Strings without a numeric prefix count as `0`, so `"abc"` and `"0"` compare equal.
#[inline]
pub fn numeric<S>(a: &S, b: &S) -> Ordering
where
    S: AsRef<str> + ?Sized,
{
    let v1 = parse_leading_f64(a.as_ref());
    let v2 = parse_leading_f64(b.as_ref());

    if v1 < v2 {
        Ordering::Less
    } else if v1 > v2 {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Parses the longest numeric prefix of `s`, after skipping leading ASCII whitespace.
///
/// The accepted form is `[+-]digits[.digits][(e|E)[+-]digits]`, where either the integer or the
/// fractional digits may be absent but not both. An exponent without digits is not part of the
/// prefix. Returns `0.0` if there is no numeric prefix. `inf` and `nan` are not recognized.
pub fn parse_leading_f64(s: &str) -> f64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let bytes = s.as_bytes();

    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_digits = count_digits(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return 0.0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }

        let exp_digits = count_digits(exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    // The prefix only contains ASCII, so slicing at `end` is on a char boundary.
    s[..end].parse().unwrap_or(0.0)
}
