//! In-process course store
//!
//! Keeps courses in insertion order behind a `tokio::sync::RwLock`.
//! Used by the HTTP tests; it never fails.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CourseStore, StoreError};
use crate::models::{Course, CourseChanges, CourseFilter, CourseSummary, NewCourse, Paginated, Pagination};

#[derive(Default)]
struct Tables {
    courses: Vec<Course>,
    /// (course_id, user_id)
    enrollments: Vec<(Uuid, Uuid)>,
}

/// Course store held in memory
#[derive(Default)]
pub struct MemoryCourseStore {
    tables: RwLock<Tables>,
}

impl MemoryCourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an enrollment of `user_id` in `course_id`.
    ///
    /// Returns `false` when the course does not exist or the pair is
    /// already enrolled.
    pub async fn enroll(&self, course_id: Uuid, user_id: Uuid) -> bool {
        let mut tables = self.tables.write().await;
        let course_exists = tables.courses.iter().any(|c| c.id == course_id);
        if !course_exists || tables.enrollments.contains(&(course_id, user_id)) {
            return false;
        }
        tables.enrollments.push((course_id, user_id));
        true
    }

    /// Number of stored courses.
    pub async fn len(&self) -> usize {
        self.tables.read().await.courses.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CourseStore for MemoryCourseStore {
    async fn insert(&self, course: NewCourse) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.tables.write().await.courses.push(Course {
            id,
            title: course.title.into_string(),
            description: None,
        });
        Ok(id)
    }

    async fn list(
        &self,
        filter: &CourseFilter,
        page: Pagination,
    ) -> Result<Paginated<CourseSummary>, StoreError> {
        let tables = self.tables.read().await;
        let matching: Vec<&Course> = tables
            .courses
            .iter()
            .filter(|c| filter.matches(&c.title))
            .collect();

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let items = matching
            .iter()
            .skip(offset)
            .take(limit)
            .map(|c| CourseSummary {
                id: c.id,
                title: c.title.clone(),
                enrollments: tables
                    .enrollments
                    .iter()
                    .filter(|(course_id, _)| *course_id == c.id)
                    .count() as i64,
            })
            .collect();

        Ok(Paginated {
            items,
            total: matching.len() as i64,
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn find(&self, id: Uuid) -> Result<Option<Course>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.courses.iter().find(|c| c.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: &CourseChanges) -> Result<Option<Course>, StoreError> {
        let mut tables = self.tables.write().await;
        let Some(course) = tables.courses.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        if let Some(title) = changes.title() {
            course.title = title.as_str().to_owned();
        }
        if let Some(description) = changes.description() {
            course.description = Some(description.as_str().to_owned());
        }

        Ok(Some(course.clone()))
    }
}
