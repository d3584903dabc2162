//! Category name <-> URL slug conversion.
//!
//! Spaces in a category name become underscores in its slug and back again.
//! Nothing else is normalized: case, punctuation and non-ASCII characters
//! pass through untouched.
//!
//! The mapping is only a true inverse for names without underscores.
//! `"A_B"` and `"A B"` share the slug `"A_B"`, which decodes to `"A B"`.
//! This collision is known and left unresolved.

/// Encodes a category name as a URL slug.
///
/// # Examples
///
/// ```
/// assert_eq!(rango::utils::slug::encode("Other Frameworks"), "Other_Frameworks");
/// ```
pub fn encode(name: &str) -> String {
    name.replace(' ', "_")
}

/// Decodes a URL slug back into a category name.
///
/// # Examples
///
/// ```
/// assert_eq!(rango::utils::slug::decode("Other_Frameworks"), "Other Frameworks");
/// ```
pub fn decode(slug: &str) -> String {
    slug.replace('_', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_replaces_every_space() {
        assert_eq!(encode("Other Frameworks"), "Other_Frameworks");
        assert_eq!(encode("a  b c"), "a__b_c");
        assert_eq!(encode(" leading"), "_leading");
    }

    #[test]
    fn test_decode_replaces_every_underscore() {
        assert_eq!(decode("Other_Frameworks"), "Other Frameworks");
        assert_eq!(decode("__"), "  ");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_no_other_normalization() {
        assert_eq!(encode("C++ & Café"), "C++_&_Café");
        assert_eq!(decode("MiXeD_Case-Name"), "MiXeD Case-Name");
    }

    #[test]
    fn test_roundtrip_without_underscores() {
        for name in [
            "Python",
            "Other Frameworks",
            "",
            " ",
            "multiple   spaces here",
            "tab\tand newline\n",
            "Ünïcödé nämé",
        ] {
            assert_eq!(decode(&encode(name)), name, "roundtrip failed for {name:?}");
        }
    }

    #[test]
    fn test_underscore_names_collide() {
        assert_eq!(encode("A_B"), encode("A B"));
        assert_eq!(decode(&encode("A_B")), "A B");
    }
}
