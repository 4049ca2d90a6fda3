//! Shared utility functions.

/// Truncate a string to approximately `max_bytes` without splitting a UTF-8
/// character boundary.
///
/// Returns a sub-slice of the original string. If the string is shorter than
/// `max_bytes`, the entire string is returned unchanged.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Estimate the token count of a prompt.
///
/// Neither backend publishes a client-side tokenizer, so this is a character
/// heuristic: each CJK codepoint counts as one token, all remaining
/// characters count one token per four, rounded up. Used to pre-flight
/// requests against a model's token budget before any network call.
pub fn estimate_tokens(text: &str) -> usize {
    let mut cjk = 0usize;
    let mut other = 0usize;
    for c in text.chars() {
        if is_cjk(c) {
            cjk += 1;
        } else {
            other += 1;
        }
    }
    cjk + other.div_ceil(4)
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4e00}'..='\u{9fff}'      // CJK Unified Ideographs
        | '\u{3400}'..='\u{4dbf}'    // Extension A
        | '\u{3000}'..='\u{303f}'    // CJK punctuation
        | '\u{ff00}'..='\u{ffef}'    // Fullwidth forms
        | '\u{3040}'..='\u{30ff}'    // Kana
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_ascii() {
        assert_eq!(truncate_str("hello world", 5), "hello");
    }

    #[test]
    fn truncate_no_op_when_short() {
        assert_eq!(truncate_str("hi", 10), "hi");
    }

    #[test]
    fn truncate_multibyte_boundary() {
        let s = "题目内容"; // 12 bytes: 3+3+3+3
        assert_eq!(truncate_str(s, 4), "题");
        assert_eq!(truncate_str(s, 6), "题目");
    }

    #[test]
    fn estimate_ascii_four_chars_per_token() {
        assert_eq!(estimate_tokens("abcd"), 1);
        assert_eq!(estimate_tokens("abcde"), 2);
        assert_eq!(estimate_tokens(""), 0);
    }

    #[test]
    fn estimate_cjk_one_char_per_token() {
        assert_eq!(estimate_tokens("题目"), 2);
    }

    #[test]
    fn estimate_mixed_text() {
        // 2 CJK + 8 ascii -> 2 + 2
        assert_eq!(estimate_tokens("题目abcdefgh"), 4);
    }
}
