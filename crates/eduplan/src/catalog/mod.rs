/// Course catalog: loading, lookup, and display ordering
mod matcher;
mod types;

pub use matcher::{extract_codes, normalize};
pub use types::Course;

use anyhow::Context;
use regex::Regex;
use std::cmp::Ordering;
use std::path::Path;
use std::sync::LazyLock;
use tracing::warn;

// Sort key grammar: department word, optional single letter prefix, course
// number, trailing letter suffix.
static SORT_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)\s*([A-Za-z]?)(\d+)([A-Za-z]*)").unwrap());

// Title shapes like "COMPSCI - 170 - Efficient Algorithms" collapse to
// "COMPSCI 170 Efficient Algorithms".
static TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z]+)\s*-?\s*(\d+[A-Za-z]*)\s*-?\s*(.*)$").unwrap());

/// The course catalog, loaded once at startup and immutable for the session.
#[derive(Debug, Clone, Default)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Builds a catalog from an already-loaded course list.
    pub fn from_courses(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Loads a catalog from a JSON file.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading course catalog from {}", path.display()))?;
        let courses: Vec<Course> = serde_json::from_str(&content)
            .with_context(|| format!("parsing course catalog from {}", path.display()))?;
        Ok(Self { courses })
    }

    /// Loads a catalog, degrading to an empty one on any failure.
    ///
    /// A missing or corrupt catalog leaves the dashboard visible but inert,
    /// which is preferable to refusing to start.
    pub fn load_or_empty(path: &Path) -> Self {
        match Self::load_from_file(path) {
            Ok(catalog) => catalog,
            Err(e) => {
                warn!("Falling back to empty course catalog: {e:#}");
                Self::default()
            }
        }
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn by_id(&self, class_id: i64) -> Option<&Course> {
        self.courses.iter().find(|c| c.class_id == class_id)
    }

    /// Finds a course whose code matches `code` after normalization.
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        let wanted = normalize(code);
        self.courses
            .iter()
            .find(|c| normalize(&c.course_code) == wanted)
    }
}

/// Sorts courses for stable display ordering: department, optional letter
/// prefix, numeric course number, trailing suffix. Non-numeric parts compare
/// case-insensitively; codes that don't fit the grammar sort after the rest
/// by raw code.
pub fn sort_courses(courses: &mut [Course]) {
    courses.sort_by(|a, b| compare_codes(&a.course_code, &b.course_code));
}

fn compare_codes(a: &str, b: &str) -> Ordering {
    match (sort_key(a), sort_key(b)) {
        (Some(ka), Some(kb)) => ka.cmp(&kb),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn sort_key(code: &str) -> Option<(String, String, u64, String)> {
    let caps = SORT_KEY_REGEX.captures(code.trim())?;
    let number = caps.get(3)?.as_str().parse::<u64>().ok()?;
    Some((
        caps.get(1).map_or(String::new(), |m| m.as_str().to_lowercase()),
        caps.get(2).map_or(String::new(), |m| m.as_str().to_lowercase()),
        number,
        caps.get(4).map_or(String::new(), |m| m.as_str().to_lowercase()),
    ))
}

/// Collapses dash-separated course titles into a single display line.
pub fn format_course_title(title: &str) -> String {
    match TITLE_REGEX.captures(title) {
        Some(caps) => {
            let subject = caps.get(1).map_or("", |m| m.as_str());
            let number = caps.get(2).map_or("", |m| m.as_str());
            let name = caps.get(3).map_or("", |m| m.as_str());
            format!("{subject} {number} {name}").trim_end().to_string()
        }
        None => title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(class_id: i64, code: &str) -> Course {
        Course {
            class_id,
            course_code: code.to_string(),
            title: code.to_string(),
            description: String::new(),
            credits: "4".to_string(),
            enrolled: 0,
            max_enroll: 0,
            reserved: 0,
            waitlisted: 0,
            class_times: Vec::new(),
            url: String::new(),
        }
    }

    #[test]
    fn test_sort_orders_by_department_prefix_number_suffix() {
        let mut courses = vec![
            course(1, "EECS 16A"),
            course(2, "CS W186"),
            course(3, "CS 170"),
            course(4, "CS 61A"),
        ];
        sort_courses(&mut courses);
        let codes: Vec<_> = courses.iter().map(|c| c.course_code.as_str()).collect();
        assert_eq!(codes, vec!["CS 61A", "CS 170", "CS W186", "EECS 16A"]);
    }

    #[test]
    fn test_sort_number_is_numeric_not_lexicographic() {
        let mut courses = vec![course(1, "CS 170"), course(2, "CS 61A")];
        sort_courses(&mut courses);
        assert_eq!(courses[0].course_code, "CS 61A");
    }

    #[test]
    fn test_sort_suffix_breaks_ties() {
        let mut courses = vec![course(1, "EECS 16B"), course(2, "EECS 16A")];
        sort_courses(&mut courses);
        assert_eq!(courses[0].course_code, "EECS 16A");
    }

    #[test]
    fn test_find_by_code_uses_normalized_comparison() {
        let catalog = CourseCatalog {
            courses: vec![course(7, "COMPSCI 170")],
        };
        assert_eq!(catalog.find_by_code("CS170").map(|c| c.class_id), Some(7));
        assert_eq!(catalog.find_by_code("cs 170").map(|c| c.class_id), Some(7));
        assert!(catalog.find_by_code("CS 161").is_none());
    }

    #[test]
    fn test_format_course_title_collapses_dashes() {
        assert_eq!(
            format_course_title("COMPSCI - 170 - Efficient Algorithms"),
            "COMPSCI 170 Efficient Algorithms"
        );
        assert_eq!(format_course_title("EECS 16A - Designing Devices"), "EECS 16A Designing Devices");
    }

    #[test]
    fn test_format_course_title_passes_through_unmatched() {
        assert_eq!(format_course_title("Special Topics"), "Special Topics");
    }
}
