//! The enumerated soil types offered by the input form.

/// A selectable soil type: the Arabic name the scorer matches against, and
/// an English alias accepted on the command line and shown as a gloss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoilType {
    pub name: &'static str,
    pub alias: &'static str,
}

impl SoilType {
    /// "طينية (clay)"
    pub fn display(&self) -> String {
        format!("{} ({})", self.name, self.alias)
    }
}

/// The nine soil types the form offers, in source order.
pub static SOIL_TYPES: [SoilType; 9] = [
    SoilType { name: "طينية", alias: "clay" },
    SoilType { name: "رملية", alias: "sandy" },
    SoilType { name: "طينية ثقيلة", alias: "heavy clay" },
    SoilType { name: "رملية-طينية", alias: "sandy-clay" },
    SoilType { name: "جيدة الصرف", alias: "well-drained" },
    SoilType { name: "طينية خفيفة", alias: "light clay" },
    SoilType { name: "رملية طينية", alias: "sandy loam" },
    SoilType { name: "رملية/حصوية", alias: "sandy/gravelly" },
    SoilType { name: "كلسية", alias: "calcareous" },
];

/// Look up a soil type by its Arabic name or English alias,
/// case-insensitively. Returns `None` for anything outside the fixed set.
pub fn resolve_soil(input: &str) -> Option<&'static SoilType> {
    let needle = input.trim().to_lowercase();
    SOIL_TYPES
        .iter()
        .find(|s| s.name == needle || s.alias.to_lowercase() == needle)
}

/// Index of a soil type within [`SOIL_TYPES`], for the form selector.
pub fn soil_index(name: &str) -> Option<usize> {
    SOIL_TYPES.iter().position(|s| s.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nine_soil_types() {
        assert_eq!(SOIL_TYPES.len(), 9);
    }

    #[test]
    fn test_resolve_by_arabic_name() {
        let soil = resolve_soil("رملية").unwrap();
        assert_eq!(soil.alias, "sandy");
    }

    #[test]
    fn test_resolve_by_english_alias() {
        let soil = resolve_soil("sandy loam").unwrap();
        assert_eq!(soil.name, "رملية طينية");
    }

    #[test]
    fn test_resolve_alias_case_insensitive() {
        assert!(resolve_soil("Well-Drained").is_some());
        assert!(resolve_soil("  CLAY ").is_some());
    }

    #[test]
    fn test_resolve_unknown_soil() {
        assert!(resolve_soil("volcanic").is_none());
        assert!(resolve_soil("").is_none());
    }

    #[test]
    fn test_soil_index_follows_source_order() {
        assert_eq!(soil_index("طينية"), Some(0));
        assert_eq!(soil_index("كلسية"), Some(8));
        assert_eq!(soil_index("volcanic"), None);
    }
}
