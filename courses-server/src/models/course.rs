//! Course types and field validation

use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

use super::ValidationError;

/// Minimum length for course titles
pub const MIN_TITLE_LEN: usize = 5;

/// Minimum length for descriptions supplied on update
pub const MIN_DESCRIPTION_LEN: usize = 10;

/// Validated course title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseTitle(String);

impl CourseTitle {
    /// Create a new course title.
    ///
    /// # Rules
    /// - At least 5 characters, counted as Unicode scalar values
    /// - Stored as given, whitespace included
    ///
    /// # Example
    /// ```
    /// use courses_server::models::CourseTitle;
    ///
    /// assert!(CourseTitle::new("Rust 101").is_ok());
    /// assert!(CourseTitle::new("Rust").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() < MIN_TITLE_LEN {
            return Err(ValidationError::TooShort {
                field: "title",
                min: MIN_TITLE_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// Validated course description (update path)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseDescription(String);

impl CourseDescription {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.chars().count() < MIN_DESCRIPTION_LEN {
            return Err(ValidationError::TooShort {
                field: "description",
                min: MIN_DESCRIPTION_LEN,
            });
        }

        Ok(Self(s.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Input for inserting a course.
///
/// Carries the title only: a description sent on create is accepted by the
/// request type but never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCourse {
    pub title: CourseTitle,
}

/// Partial update with at least one field set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseChanges {
    title: Option<CourseTitle>,
    description: Option<CourseDescription>,
}

impl CourseChanges {
    /// Build a change set, rejecting one that would change nothing.
    pub fn new(
        title: Option<CourseTitle>,
        description: Option<CourseDescription>,
    ) -> Result<Self, ValidationError> {
        if title.is_none() && description.is_none() {
            return Err(ValidationError::NoChanges);
        }

        Ok(Self { title, description })
    }

    pub fn title(&self) -> Option<&CourseTitle> {
        self.title.as_ref()
    }

    pub fn description(&self) -> Option<&CourseDescription> {
        self.description.as_ref()
    }
}

/// Course record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Course {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
}

/// Course row for list display, with live enrollment count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct CourseSummary {
    pub id: Uuid,
    pub title: String,
    pub enrollments: i64,
}

/// Title filter for course listing.
///
/// Matches case-insensitively anywhere in the title. An empty filter
/// matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseFilter {
    title: Option<String>,
}

impl CourseFilter {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title: title.filter(|t| !t.is_empty()),
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// `ILIKE` pattern with the user's `%`, `_` and `\` escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.title.as_deref().map(|title| {
            let mut pattern = String::with_capacity(title.len() + 2);
            pattern.push('%');
            for c in title.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }

    /// In-process equivalent of the `ILIKE` match.
    pub fn matches(&self, title: &str) -> bool {
        match &self.title {
            None => true,
            Some(needle) => title.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_titles() {
        assert!(CourseTitle::new("Intro").is_ok());
        assert!(CourseTitle::new("Advanced PostgreSQL").is_ok());
    }

    #[test]
    fn rejects_short_title() {
        let err = CourseTitle::new("Rust").unwrap_err();
        assert_eq!(
            err,
            ValidationError::TooShort {
                field: "title",
                min: 5
            }
        );
    }

    #[test]
    fn title_length_counts_characters() {
        // 4 characters, 8 bytes
        assert!(CourseTitle::new("ñáéí").is_err());
        assert!(CourseTitle::new("ñáéíó").is_ok());
        // Six UTF-16 units but three scalars, matching the CHECK constraint.
        assert!(CourseTitle::new("😀😀😀").is_err());
    }

    #[test]
    fn title_is_not_trimmed() {
        let title = CourseTitle::new("  abc  ").unwrap();
        assert_eq!(title.as_str(), "  abc  ");
    }

    #[test]
    fn description_minimum() {
        assert!(CourseDescription::new("too short").is_err());
        assert!(CourseDescription::new("long enough").is_ok());
    }

    #[test]
    fn changes_require_a_field() {
        assert_eq!(
            CourseChanges::new(None, None).unwrap_err(),
            ValidationError::NoChanges
        );

        let changes = CourseChanges::new(Some(CourseTitle::new("Hello").unwrap()), None).unwrap();
        assert_eq!(changes.title().map(CourseTitle::as_str), Some("Hello"));
        assert!(changes.description().is_none());
    }

    #[test]
    fn empty_filter_matches_all() {
        let filter = CourseFilter::new(Some(String::new()));
        assert_eq!(filter.title(), None);
        assert_eq!(filter.like_pattern(), None);
        assert!(filter.matches("anything"));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        let filter = CourseFilter::new(Some(r"100%_a\b".to_owned()));
        assert_eq!(filter.like_pattern().as_deref(), Some(r"%100\%\_a\\b%"));
    }

    #[test]
    fn filter_matches_substring_case_insensitively() {
        let filter = CourseFilter::new(Some("rust".to_owned()));
        assert!(filter.matches("Learning Rust"));
        assert!(!filter.matches("Learning Go"));
    }
}
