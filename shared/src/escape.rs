/// Escapes `& < > " '` in a single pass so entities introduced for one
/// character are never re-escaped.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Escapes a URL for a quoted `src`/`href` attribute. The parser decodes the
/// entities again, so well-formed URLs resolve unchanged.
pub fn escape_attribute(url: &str) -> String {
    escape_html(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;"
        );
    }

    #[test]
    fn does_not_double_escape() {
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
        assert_eq!(escape_html("<&>"), "&lt;&amp;&gt;");
    }

    #[test]
    fn leaves_plain_text_alone() {
        assert_eq!(escape_html("Jane Doe • 555-1234"), "Jane Doe • 555-1234");
        assert_eq!(escape_html(""), "");
    }

    #[test]
    fn attribute_escaping_keeps_query_strings_readable() {
        assert_eq!(
            escape_attribute("https://x.com/?a=1&b=2"),
            "https://x.com/?a=1&amp;b=2"
        );
        assert_eq!(
            escape_attribute("http://x/\" onerror=\"alert(1)"),
            "http://x/&quot; onerror=&quot;alert(1)"
        );
    }
}
