//! Anchor identifiers derived from heading text.

/// Convert text to a URL-safe anchor id.
///
/// The text is lower-cased, every run of characters outside `[a-z0-9]`
/// becomes a single `-`, and leading/trailing dashes are dropped. Any input
/// produces an id, possibly empty. Applying `slug` to its own output returns
/// the same string.
///
/// # Example
///
/// ```
/// use readmark::parser::slug;
///
/// assert_eq!(slug("Hello, World!"), "hello-world");
/// ```
pub fn slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut id = String::with_capacity(lower.len());
    let mut pending_dash = false;

    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_dash && !id.is_empty() {
                id.push('-');
            }
            pending_dash = false;
            id.push(c);
        } else {
            pending_dash = true;
        }
    }

    id
}
