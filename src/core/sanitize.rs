// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Lower-case and keep only alphanumerics. Matches how rendered tables sort
/// and how punctuation/whitespace noise is ignored when comparing text.
pub fn alnum_lower(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Trim + lower-case, used for header matching.
pub fn header_key(s: &str) -> String {
    normalize_ws(s).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alnum_lower_drops_punctuation_and_case() {
        assert_eq!(alnum_lower("O'Brien, Inc."), "obrieninc");
        assert_eq!(alnum_lower("  A - 1 "), "a1");
        assert_eq!(alnum_lower(""), "");
    }

    #[test]
    fn entities_decode_amp_last() {
        assert_eq!(normalize_entities("a&amp;lt;b"), "a&lt;b");
        assert_eq!(normalize_entities("x&nbsp;y"), "x y");
    }
}
