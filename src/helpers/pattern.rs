//! Prefix pattern construction.

const SPECIAL: &[char] = &[
    '.', '*', '+', '?', '^', '$', '{', '}', '(', ')', '|', '[', ']', '\\',
];

/// Regular-expression source matching any string that starts with `prefix`.
///
/// Every regex metacharacter in `prefix` is backslash-escaped and the result
/// is anchored with `^`.
///
/// ```
/// use frame_budget::helpers::prefix_pattern;
///
/// assert_eq!(prefix_pattern("/api/v1"), "^/api/v1");
/// assert_eq!(prefix_pattern("a.b(c)"), r"^a\.b\(c\)");
/// ```
#[must_use]
pub fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    pattern.push('^');
    for ch in prefix.chars() {
        if SPECIAL.contains(&ch) {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern
}
