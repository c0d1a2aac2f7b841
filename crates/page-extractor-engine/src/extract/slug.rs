/// Turns heading text into a URL-safe anchor id.
///
/// Lower-cases the text, turns whitespace runs into single hyphens and deletes
/// anything that is not a letter, digit or hyphen. Consecutive hyphens collapse
/// and leading/trailing hyphens are dropped.
///
/// Identical headings produce identical ids; there is no de-duplication.
pub fn slugify(header_text: &str) -> String {
    let mut slug = String::with_capacity(header_text.len());
    let mut pending_hyphen = false;

    for c in header_text.chars().flat_map(char::to_lowercase) {
        if c.is_whitespace() || c == '-' {
            pending_hyphen = true;
        } else if c.is_alphanumeric() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        }
    }

    slug
}
