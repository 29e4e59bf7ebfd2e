//! URL-safe slug derivation for manufacturer names.

/// Derive the slug for a display name.
///
/// Lowercases the input, collapses every run of characters outside
/// `[a-z0-9]` into a single `-`, and strips leading/trailing hyphens.
/// Non-ASCII letters count as separators.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_punctuation_and_spaces_collapse() {
        assert_eq!(slugify("Acme Corp."), "acme-corp");
    }

    #[test]
    fn test_surrounding_whitespace_is_stripped() {
        assert_eq!(slugify("  3M  "), "3m");
    }

    #[test]
    fn test_mixed_separator_runs() {
        assert_eq!(slugify("A/B--C"), "a-b-c");
    }

    #[test]
    fn test_non_ascii_letters_become_separators() {
        assert_eq!(slugify("Müller GmbH"), "m-ller-gmbh");
    }

    #[test]
    fn test_only_separators_yields_empty() {
        assert_eq!(slugify("--  ..//"), "");
        assert_eq!(slugify(""), "");
    }

    #[test]
    fn test_already_slugged_is_unchanged() {
        assert_eq!(slugify("bosch-rexroth-2"), "bosch-rexroth-2");
    }

    #[test]
    fn test_deterministic() {
        let name = "Black & Decker (EU)";
        assert_eq!(slugify(name), slugify(name));
        assert_eq!(slugify(name), "black-decker-eu");
    }
}
