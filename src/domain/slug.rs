//! Deterministic slug derivation for post titles.
//!
//! The generator is total: every input maps to a slug, which may be empty
//! when the input carries no word characters at all. It is also idempotent,
//! so feeding an existing slug back through returns it unchanged. Uniqueness
//! within the post collection is the persistence collaborator's concern, not
//! this module's.

/// Derive a URL-safe slug from free-form title text.
///
/// Lower-cases and trims the input, then collapses every maximal run of
/// whitespace and non-word characters into a single hyphen. Word characters
/// are ASCII alphanumerics and `_`. Runs at the edges produce no hyphen, so
/// the result never starts or ends with one.
pub fn generate_slug(text: &str) -> String {
    let lowered = text.to_lowercase();
    let trimmed = lowered.trim();

    let mut slug = String::with_capacity(trimmed.len());
    let mut pending_separator = false;

    for ch in trimmed.chars() {
        if is_word_char(ch) {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_punctuation_and_whitespace() {
        assert_eq!(generate_slug("Hello, World!  "), "hello-world");
    }

    #[test]
    fn strips_edge_hyphens() {
        assert_eq!(generate_slug(" ---Foo Bar--- "), "foo-bar");
    }

    #[test]
    fn keeps_underscores() {
        assert_eq!(generate_slug("snake_case title"), "snake_case-title");
    }

    #[test]
    fn is_total_on_degenerate_input() {
        assert_eq!(generate_slug(""), "");
        assert_eq!(generate_slug("   "), "");
        assert_eq!(generate_slug("!!!---!!!"), "");
    }

    #[test]
    fn is_idempotent() {
        for input in [
            "Hello, World!  ",
            " ---Foo Bar--- ",
            "Pattern   Library",
            "Ünicode läuft",
            "a_b-c d",
        ] {
            let once = generate_slug(input);
            assert_eq!(generate_slug(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn output_has_no_whitespace_or_edge_hyphens() {
        for input in ["  x  y  ", "-a-", "b!c?d", "9 lives", "__init__"] {
            let slug = generate_slug(input);
            assert!(!slug.contains(char::is_whitespace), "slug: {slug:?}");
            assert!(!slug.starts_with('-'), "slug: {slug:?}");
            assert!(!slug.ends_with('-'), "slug: {slug:?}");
        }
    }
}
