//! String utilities for the domain layer.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Used to keep response-body previews in error messages short.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Escape a value for use inside a double-quoted HTML attribute
pub fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // "ねこ" is 6 bytes; cutting inside a character must back off
        let out = truncate("ねこねこ", 7);
        assert!(out.ends_with("..."));
        assert!(out.starts_with('ね'));
    }

    #[test]
    fn test_escape_attribute() {
        assert_eq!(
            escape_attribute(r#"http://x/a.jpg?b=1&c="2""#),
            "http://x/a.jpg?b=1&amp;c=&quot;2&quot;"
        );
        assert_eq!(escape_attribute("plain"), "plain");
    }
}
