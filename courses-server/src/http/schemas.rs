//! OpenAPI schemas for types that do not derive `ToSchema` themselves
//!
//! Model rows stay free of utoipa; these mirror their serialized shape.
//! Error bodies are built with `json!` so they are described here too.

use utoipa::ToSchema;
use uuid::Uuid;

/// Course record
#[derive(ToSchema)]
#[schema(as = Course)]
#[allow(dead_code)]
pub struct CourseSchema {
    id: Uuid,
    #[schema(example = "Intro to Rust")]
    title: String,
    /// Null until set by an update
    description: Option<String>,
}

/// Course list entry with its enrollment count
#[derive(ToSchema)]
#[schema(as = CourseSummary)]
#[allow(dead_code)]
pub struct CourseSummarySchema {
    id: Uuid,
    #[schema(example = "Intro to Rust")]
    title: String,
    #[schema(example = 2)]
    enrollments: i64,
}

/// Error body for every route except PATCH /courses/{id}
#[derive(ToSchema)]
#[schema(as = ErrorResponse)]
#[allow(dead_code)]
pub struct ErrorSchema {
    #[schema(example = "title must be at least 5 characters")]
    error: String,
    /// Offending field, present for field-level validation errors
    #[schema(example = "title")]
    field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_json<T: PartialSchema>() -> serde_json::Value {
        serde_json::to_value(T::schema()).unwrap()
    }

    #[test]
    fn error_field_is_optional() {
        let schema = schema_json::<ErrorSchema>();
        assert_eq!(schema["required"], serde_json::json!(["error"]));
    }

    #[test]
    fn course_description_is_nullable() {
        let schema = schema_json::<CourseSchema>();
        let required = schema["required"].as_array().unwrap();
        assert!(required.contains(&"id".into()));
        assert!(required.contains(&"title".into()));
        assert!(!required.contains(&"description".into()));
    }
}
