//! Grammar validation — pure scanning, no allocation of a [`crate::kernel::Polynomial`].

/// Check whether `s` is a syntactically valid polynomial literal.
#[must_use]
pub fn validate(s: &str) -> bool {
    is_valid_poly(s)
}

fn is_valid_poly(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    if s.as_bytes()[0] == b'(' {
        match split_top_level(s, b'+') {
            Some(parts) => parts.iter().all(|part| is_valid_mono(part)),
            None => false,
        }
    } else {
        is_valid_coefficient(s)
    }
}

fn is_valid_mono(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'(' || bytes[bytes.len() - 1] != b')' {
        return false;
    }
    let inner = &s[1..s.len() - 1];
    match find_depth_zero_comma(inner) {
        Some(idx) => {
            let (poly_part, exp_part) = (&inner[..idx], &inner[idx + 1..]);
            is_valid_poly(poly_part) && is_valid_exponent(exp_part)
        }
        None => false,
    }
}

fn is_valid_coefficient(s: &str) -> bool {
    has_digit_format(s, true) && s.parse::<i64>().is_ok()
}

fn is_valid_exponent(s: &str) -> bool {
    if !has_digit_format(s, false) {
        return false;
    }
    #[allow(
        clippy::cast_sign_loss,
        reason = "i32::MAX is a non-negative compile-time constant"
    )]
    const MAX_EXPONENT: u64 = i32::MAX as u64;
    match s.parse::<u64>() {
        Ok(value) => value <= MAX_EXPONENT,
        Err(_) => false,
    }
}

/// Digits only, with an optional single leading `-` when `allow_negative`.
/// A leading `+` is never accepted — the protocol rejects it everywhere.
fn has_digit_format(s: &str, allow_negative: bool) -> bool {
    let digits = if allow_negative {
        s.strip_prefix('-').unwrap_or(s)
    } else {
        s
    };
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Split `s` on top-level occurrences of `sep` (outside any parenthesis
/// nesting), rejecting unbalanced brackets and any empty piece (which
/// catches a leading/trailing/doubled separator).
fn split_top_level(s: &str, sep: u8) -> Option<Vec<&str>> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            b if b == sep && depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(&s[start..]);
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}

/// Find the first comma at bracket depth zero within `s` — the comma that
/// separates a monomial's inner polynomial from its exponent. A valid
/// monomial body contains exactly one such comma.
fn find_depth_zero_comma(s: &str) -> Option<usize> {
    let mut depth: i32 = 0;
    for (i, &b) in s.as_bytes().iter().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => depth -= 1,
            b',' if depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}
