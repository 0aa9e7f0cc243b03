//! HTML escaping of the three markup-significant characters.

/// Escape `&`, `<` and `>`. Ampersand goes first so the entities introduced
/// for `<` and `>` are not escaped twice.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Inverse of [`escape_html`]; other entities are left untouched.
pub(crate) fn unescape_html(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
