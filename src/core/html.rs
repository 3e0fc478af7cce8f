// src/core/html.rs
//
// Cell markup → visible text. The table cells are small fragments
// (`<span class=..>7.12</span>`, `12&nbsp;`), so a tag skipper is enough.

use super::sanitize::{normalize_entities, normalize_ws};

/// Drop everything between `<` and `>`, then collapse whitespace.
/// Quoted `>` inside attribute values does not end the tag.
pub fn strip_tags<S: AsRef<str>>(s: S) -> String {
    let s = s.as_ref();

    let mut out = String::with_capacity(s.len());
    let mut in_tag = false;
    let mut quote: Option<char> = None;

    for ch in s.chars() {
        match (in_tag, quote, ch) {
            (false, _, '<') => in_tag = true,
            (false, _, _) => out.push(ch),
            (true, None, '"' | '\'') => quote = Some(ch),
            (true, Some(q), c) if c == q => quote = None,
            (true, None, '>') => in_tag = false,
            _ => {}
        }
    }
    normalize_ws(&out)
}

/// Rendered text of a cell's inner HTML.
pub fn cell_text(inner_html: &str) -> String {
    // Entities after tag stripping, so a decoded `&lt;` is not taken for a tag.
    normalize_ws(&normalize_entities(&strip_tags(inner_html)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_nested_markup() {
        assert_eq!(strip_tags(r#"<div class="x"><span>7.12</span></div>"#), "7.12");
        assert_eq!(strip_tags("plain"), "plain");
    }

    #[test]
    fn quoted_gt_stays_inside_tag() {
        assert_eq!(strip_tags(r#"<a title="a > b">Salah</a>"#), "Salah");
    }

    #[test]
    fn cell_text_decodes_and_collapses() {
        assert_eq!(cell_text("  12&nbsp;<b>%</b>\n "), "12 %");
        assert_eq!(cell_text("Brighton &amp; Hove"), "Brighton & Hove");
        assert_eq!(cell_text("&lt;b&gt;"), "<b>");
    }
}
