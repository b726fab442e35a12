//! URL-friendly slug derivation.
//!
//! Slugs are derived from a hotel title once, at creation time. They are
//! never re-derived when the title is later updated, so a stale slug after a
//! rename is expected behaviour.

/// Derive a slug from a title.
///
/// Convention: lowercase, alphanumerics kept, every run of anything else
/// (whitespace, punctuation) collapsed to a single hyphen, no leading or
/// trailing hyphens.
///
/// # Examples
///
/// ```
/// use innkeep_core::slug::slugify;
///
/// assert_eq!(slugify("Sunset Lodge"), "sunset-lodge");
/// assert_eq!(slugify("  The  Grand -- Hotel!  "), "the-grand-hotel");
/// assert_eq!(slugify("Côte d'Azur"), "côte-d-azur");
/// ```
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for ch in title.chars() {
        if ch.is_alphanumeric() {
            slug.extend(ch.to_lowercase());
        } else if !slug.ends_with('-') && !slug.is_empty() {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_hyphenates() {
        assert_eq!(slugify("Sunset Lodge"), "sunset-lodge");
    }

    #[test]
    fn collapses_punctuation_runs() {
        assert_eq!(slugify("The  Grand -- Hotel!"), "the-grand-hotel");
    }

    #[test]
    fn trims_edge_hyphens() {
        assert_eq!(slugify("  Beach House  "), "beach-house");
        assert_eq!(slugify("---x---"), "x");
    }

    #[test]
    fn deterministic_for_same_title() {
        assert_eq!(slugify("Villa d'Este"), slugify("Villa d'Este"));
    }

    #[test]
    fn empty_title_yields_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
