//! Digit normalization for catalog identifiers and date strings.
//!
//! Manuscript ids and death dates arrive in a mixture of Western and
//! Arabic-indic digits (e.g. `"١٠٥٤هـ"`). Shard routing and date-range
//! comparison both work on the first digit run after normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]+").unwrap());

/// Replace each Arabic-indic digit (`٠`–`٩`) with its Western equivalent.
/// All other characters pass through unchanged.
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '٠'..='٩' => {
                // U+0660..U+0669 maps linearly onto '0'..'9'
                char::from(b'0' + (c as u32 - 0x0660) as u8)
            }
            _ => c,
        })
        .collect()
}

/// Extract the integer value of the first maximal digit run in `s`, after
/// digit normalization. Returns `None` when the string holds no digits;
/// callers decide their own default, absence is not zero.
pub fn extract_integer(s: &str) -> Option<u64> {
    let normalized = normalize_digits(s);
    let run = DIGIT_RUN.find(&normalized)?;
    run.as_str().parse().ok()
}

/// The first digit run itself, as a normalized string. Used for the
/// numeric-core fallback when comparing ids whose prefixes differ.
pub fn digit_run(s: &str) -> Option<String> {
    let normalized = normalize_digits(s);
    DIGIT_RUN
        .find(&normalized)
        .map(|m| m.as_str().to_string())
}
