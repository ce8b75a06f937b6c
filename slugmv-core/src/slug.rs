use unicode_normalization::UnicodeNormalization;

/// Convert arbitrary text into a lowercase ASCII slug made of `[a-z0-9-]`.
///
/// Accents are removed by compatibility decomposition followed by dropping
/// every non-ASCII code point, so "Café" becomes "cafe". Whitespace and
/// hyphen runs collapse into a single hyphen and the result never starts or
/// ends with one. Text made only of symbols produces an empty string.
pub fn slugify(text: &str) -> String {
    let ascii: String = text.nfkd().filter(char::is_ascii).collect();

    let mut slug = String::with_capacity(ascii.len());
    let mut pending_separator = false;

    for c in ascii.chars().map(|c| c.to_ascii_lowercase()) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        } else if c == '-' || c.is_ascii_whitespace() || is_control_space(c) {
            pending_separator = true;
        }
        // everything else is dropped without breaking the current word
    }

    slug
}

// Vertical tab and the information separators are whitespace for regex `\s`
// but not for `char::is_ascii_whitespace`.
fn is_control_space(c: char) -> bool {
    matches!(c, '\x0b' | '\x1c'..='\x1f')
}
