//! Course-code normalization and mention extraction.
//!
//! Two codes denote the same course if and only if their normalized forms
//! are identical. Normalization is deliberately minimal: section/title
//! suffixes and whitespace are stripped, case is folded, and exactly one
//! department alias is rewritten.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// "COMPSCI" is contracted to "CS" only when a digit follows, so codes like
// EECS 16A (which contain "CS" mid-word) are never rewritten.
static DEPT_CONTRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"COMPSCI(\d)").unwrap());

// Course-code mentions: a known department spelling, an optional single
// letter prefix, digits, optional trailing letters, an optional lab suffix.
// An optional decorative marker may precede the code.
static CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:🎓\s*)?\b((?:COMPSCI|EECS|CS|DATA|MATH|STAT)\s*[A-Z]?\d+[A-Z]*(?:\s+LAB)?)\b")
        .unwrap()
});

/// Canonicalizes a course code for comparison.
///
/// Strips any trailing `":..."` annotation, removes all whitespace,
/// upper-cases, and contracts the long department spelling.
pub fn normalize(code: &str) -> String {
    let code = code.split(':').next().unwrap_or(code);
    let mut collapsed: String = code.chars().filter(|c| !c.is_whitespace()).collect();
    collapsed.make_ascii_uppercase();
    DEPT_CONTRACTION.replace_all(&collapsed, "CS$1").into_owned()
}

/// Extracts course-code mentions from free text.
///
/// Returns the raw spelling of the first match for each distinct course
/// (deduplicated by normalized form), in order of first appearance. Never
/// fails; text without mentions yields an empty vec.
pub fn extract_codes(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut codes = Vec::new();

    for caps in CODE_REGEX.captures_iter(text) {
        let raw = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        if seen.insert(normalize(raw)) {
            codes.push(raw.to_string());
        }
    }

    codes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_contracts_long_department_form() {
        assert_eq!(normalize("COMPSCI 170"), normalize("CS170"));
        assert_eq!(normalize("COMPSCI 170"), "CS170");
    }

    #[test]
    fn test_normalize_leaves_other_departments_alone() {
        assert_eq!(normalize("EECS 16A"), "EECS16A");
        assert_ne!(normalize("EECS 16A"), "CS16A");
    }

    #[test]
    fn test_normalize_strips_section_suffix() {
        assert_eq!(normalize("COMPSCI 170: Intro to Algorithms"), "CS170");
        assert_eq!(normalize("cs 61a: The Structure of Programs"), "CS61A");
    }

    #[test]
    fn test_normalize_is_case_and_whitespace_insensitive() {
        assert_eq!(normalize("compsci  61a"), normalize("CS61A"));
        assert_eq!(normalize(" STAT 134 "), "STAT134");
    }

    #[test]
    fn test_extract_from_decorated_text() {
        let codes = extract_codes("🎓 COMPSCI 170: Efficient Algorithms and Intractable Problems");
        assert!(codes.iter().any(|c| normalize(c) == normalize("CS 170")));
    }

    #[test]
    fn test_extract_dedupes_by_normalized_form() {
        let codes = extract_codes("Take COMPSCI 170 early; CS170 pairs well with CS 161.");
        assert_eq!(codes, vec!["COMPSCI 170", "CS 161"]);
    }

    #[test]
    fn test_extract_preserves_first_match_order() {
        let codes = extract_codes("EECS 16A before DATA 100, then MATH 110.");
        assert_eq!(codes, vec!["EECS 16A", "DATA 100", "MATH 110"]);
    }

    #[test]
    fn test_extract_does_not_match_inside_other_departments() {
        // The CS alternative must not fire on the tail of EECS.
        let codes = extract_codes("EECS 16A");
        assert_eq!(codes, vec!["EECS 16A"]);
    }

    #[test]
    fn test_extract_handles_lab_suffix_and_letter_prefix() {
        let codes = extract_codes("CS W186 and CS 61C LAB are both offered.");
        assert_eq!(codes, vec!["CS W186", "CS 61C LAB"]);
    }

    #[test]
    fn test_extract_empty_on_no_matches() {
        assert!(extract_codes("what's the weather like today?").is_empty());
    }
}
