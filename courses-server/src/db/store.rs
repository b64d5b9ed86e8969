//! Store seam for course operations
//!
//! HTTP handlers talk to a `dyn CourseStore`; production uses
//! [`PgCourseStore`](super::PgCourseStore), tests use
//! [`MemoryCourseStore`](super::MemoryCourseStore).

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Course, CourseChanges, CourseFilter, CourseSummary, NewCourse, Paginated, Pagination};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Persistence operations over courses and their enrollments.
#[async_trait]
pub trait CourseStore: Send + Sync {
    /// Insert a course and return its generated id.
    async fn insert(&self, course: NewCourse) -> Result<Uuid, StoreError>;

    /// One page of course summaries matching `filter`, in insertion order,
    /// with the total match count.
    async fn list(
        &self,
        filter: &CourseFilter,
        page: Pagination,
    ) -> Result<Paginated<CourseSummary>, StoreError>;

    /// Fetch a single course.
    async fn find(&self, id: Uuid) -> Result<Option<Course>, StoreError>;

    /// Apply the present fields of `changes`, returning the updated course,
    /// or `None` when no row was updated.
    async fn update(&self, id: Uuid, changes: &CourseChanges) -> Result<Option<Course>, StoreError>;
}
