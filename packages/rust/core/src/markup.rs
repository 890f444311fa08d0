//! Small HTML helpers shared by the block renderers.

/// Escape a value for use inside a quoted HTML attribute.
///
/// Titles are host-formatted HTML and are passed through untouched; only
/// URLs placed in `href` go through here.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
