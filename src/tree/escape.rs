//! Text escaping for names embedded in the rendered page.

/// Escape the five characters that are unsafe inside HTML text or attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Directory names double every backslash before HTML escaping.
pub fn escape_dir_name(input: &str) -> String {
    escape_html(&input.replace('\\', "\\\\"))
}
