//! Static reference tables.
//!
//! Ordered slices, not maps: dropdown order is part of the contract and
//! must not depend on hash iteration order. The religion set is closed:
//! fixed at compile time, immutable for the process lifetime.

/// The closed religion list, in dropdown order.
///
/// `"अन्य"` (other) is a valid dropdown choice but carries no caste
/// hierarchy of its own.
pub const RELIGIONS: &[&str] = &["हिंदू", "मुस्लिम", "सिख", "ईसाई", "बौद्ध", "जैन", "अन्य"];

/// The religion value that selects the Muslim caste table.
pub const MUSLIM_RELIGION: &str = "मुस्लिम";

/// The religion value with no caste hierarchy.
pub const OTHER_RELIGION: &str = "अन्य";

/// The general category→caste table, used by every religion that does not
/// select a dedicated table.
pub const GENERAL_CASTE_MAP: &[(&str, &[&str])] = &[
    ("सामान्य", &["ब्राह्मण", "राजपूत", "भूमिहार", "कायस्थ"]),
    ("पिछड़ा वर्ग", &["यादव", "कुर्मी", "कुशवाहा", "बनिया", "तेली"]),
    ("अति पिछड़ा वर्ग", &["मल्लाह", "नाई", "कुम्हार", "बढ़ई", "धानुक"]),
    ("अनुसूचित जाति", &["चमार", "दुसाध", "मुसहर", "धोबी", "पासी"]),
    ("अनुसूचित जनजाति", &["संथाल", "उरांव", "मुंडा", "खरवार"]),
];

/// The Muslim category→caste table, selected only for [`MUSLIM_RELIGION`].
pub const MUSLIM_CASTE_MAP: &[(&str, &[&str])] = &[
    ("अशराफ़", &["सैयद", "शेख", "पठान", "मुग़ल"]),
    ("अजलाफ़", &["अंसारी", "मंसूरी", "राईन", "कुंजड़ा", "धुनिया"]),
    ("अरज़ाल", &["हलालखोर", "भटियारा", "नट"]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_castes() {
        for (category, castes) in GENERAL_CASTE_MAP.iter().chain(MUSLIM_CASTE_MAP) {
            assert!(!castes.is_empty(), "category {category} has no castes");
        }
    }

    #[test]
    fn special_religions_are_in_the_closed_list() {
        assert!(RELIGIONS.contains(&MUSLIM_RELIGION));
        assert!(RELIGIONS.contains(&OTHER_RELIGION));
    }

    #[test]
    fn category_names_are_unique_within_each_table() {
        for table in [GENERAL_CASTE_MAP, MUSLIM_CASTE_MAP] {
            let mut seen = std::collections::HashSet::new();
            for (category, _) in table {
                assert!(seen.insert(category), "duplicate category {category}");
            }
        }
    }
}
