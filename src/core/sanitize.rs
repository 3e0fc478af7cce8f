// src/core/sanitize.rs

pub fn normalize_entities(s: &str) -> String {
    s.replace("&nbsp;", " ")
        .replace("&#39;", "'")
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
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

/// Make a label safe inside a file name. Spaces are kept; characters that
/// Windows or POSIX reject are dropped.
pub fn sanitize_filename_part(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') && !c.is_control())
        .collect();
    let out = normalize_ws(&cleaned);
    if out.is_empty() { s!("league") } else { out }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_collapses_and_trims() {
        assert_eq!(normalize_ws("  a \t\n b  "), "a b");
    }

    #[test]
    fn amp_is_decoded_last() {
        assert_eq!(normalize_entities("&amp;nbsp;"), "&nbsp;");
    }

    #[test]
    fn filename_part_drops_reserved_chars() {
        assert_eq!(sanitize_filename_part("Serie A"), "Serie A");
        assert_eq!(sanitize_filename_part("a/b: c?"), "ab c");
        assert_eq!(sanitize_filename_part("??"), "league");
    }
}
