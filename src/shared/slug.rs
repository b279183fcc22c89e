/// Derive the URL slug stored alongside a category or recipe name.
///
/// Lowercase ASCII, transliterated, with runs of anything else collapsed into
/// a single `-`. The same name always yields the same slug. A name with no
/// letters or digits yields an empty slug, which services reject.
pub fn derive_slug(name: &str) -> String {
    ::slug::slugify(name.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(derive_slug("Desserts"), "desserts");
    }

    #[test]
    fn test_accents_are_transliterated() {
        assert_eq!(derive_slug("Postres Fríos"), "postres-frios");
    }

    #[test]
    fn test_punctuation_and_padding_collapse() {
        assert_eq!(derive_slug("  Mac & Cheese!  "), "mac-cheese");
    }

    #[test]
    fn test_punctuation_only_yields_empty_slug() {
        assert_eq!(derive_slug("!!!"), "");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(derive_slug("Pan de Muerto"), derive_slug("Pan de Muerto"));
    }
}
