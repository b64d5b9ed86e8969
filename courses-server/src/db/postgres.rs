//! PostgreSQL course store
//!
//! - insert: single INSERT ... RETURNING id
//! - list: LEFT JOIN with enrollment count (no N+1), total counted alongside,
//!   ordered by the identity column `seq`
//! - update: COALESCE so absent fields keep their stored value

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CourseStore, StoreError};
use crate::models::{Course, CourseChanges, CourseFilter, CourseSummary, NewCourse, Paginated, Pagination};

/// Course store backed by a sqlx connection pool
#[derive(Clone)]
pub struct PgCourseStore {
    pool: PgPool,
}

impl PgCourseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl CourseStore for PgCourseStore {
    async fn insert(&self, course: NewCourse) -> Result<Uuid, StoreError> {
        let id: Uuid = sqlx::query_scalar("INSERT INTO courses (title) VALUES ($1) RETURNING id")
            .bind(course.title.as_str())
            .fetch_one(&self.pool)
            .await?;

        Ok(id)
    }

    /// Page query and total count run concurrently on separate connections.
    async fn list(
        &self,
        filter: &CourseFilter,
        page: Pagination,
    ) -> Result<Paginated<CourseSummary>, StoreError> {
        let pattern = filter.like_pattern();

        let rows = sqlx::query_as::<_, CourseSummary>(
            r#"
            SELECT
                c.id,
                c.title,
                COUNT(e.id) AS enrollments
            FROM courses c
            LEFT JOIN enrollments e ON e.course_id = c.id
            WHERE ($1::text IS NULL OR c.title ILIKE $1)
            GROUP BY c.id
            ORDER BY c.seq
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(pattern.as_deref())
        .bind(i64::from(page.limit()))
        .bind(i64::try_from(page.offset()).unwrap_or(i64::MAX))
        .fetch_all(&self.pool);

        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*)
            FROM courses c
            WHERE ($1::text IS NULL OR c.title ILIKE $1)
            "#,
        )
        .bind(pattern.as_deref())
        .fetch_one(&self.pool);

        let (items, total) = tokio::try_join!(rows, total)?;

        Ok(Paginated {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        })
    }

    async fn find(&self, id: Uuid) -> Result<Option<Course>, StoreError> {
        let course = sqlx::query_as::<_, Course>(
            "SELECT id, title, description FROM courses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    async fn update(&self, id: Uuid, changes: &CourseChanges) -> Result<Option<Course>, StoreError> {
        let course = sqlx::query_as::<_, Course>(
            r#"
            UPDATE courses
            SET
                title = COALESCE($2, title),
                description = COALESCE($3, description)
            WHERE id = $1
            RETURNING id, title, description
            "#,
        )
        .bind(id)
        .bind(changes.title().map(|t| t.as_str()))
        .bind(changes.description().map(|d| d.as_str()))
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations};
    use crate::models::{CourseDescription, CourseTitle};

    // Integration tests - run with DATABASE_URL set
    // cargo test -p courses-server -- --ignored

    async fn store() -> PgCourseStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pool(&url).await.expect("pool creation failed");
        run_migrations(&pool).await.expect("migrations failed");
        PgCourseStore::new(pool)
    }

    fn new_course(title: &str) -> NewCourse {
        NewCourse {
            title: CourseTitle::new(title).unwrap(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_then_find_has_null_description() {
        let store = store().await;
        let title = Uuid::new_v4().to_string();

        let id = store.insert(new_course(&title)).await.unwrap();
        let course = store.find(id).await.unwrap().expect("course exists");

        assert_eq!(course.title, title);
        assert_eq!(course.description, None);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_filters_by_title_and_counts_enrollments() {
        let store = store().await;
        let title = Uuid::new_v4().to_string();
        let id = store.insert(new_course(&title)).await.unwrap();

        let filter = CourseFilter::new(Some(title.clone()));
        let page = store.list(&filter, Pagination::default()).await.unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.total_pages(), 1);
        assert_eq!(
            page.items,
            vec![CourseSummary {
                id,
                title: title.clone(),
                enrollments: 0
            }]
        );

        let user_id: Uuid =
            sqlx::query_scalar("INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id")
                .bind("Test User")
                .bind(format!("{}@example.com", Uuid::new_v4()))
                .fetch_one(store.pool())
                .await
                .unwrap();
        sqlx::query("INSERT INTO enrollments (course_id, user_id) VALUES ($1, $2)")
            .bind(id)
            .bind(user_id)
            .execute(store.pool())
            .await
            .unwrap();

        let page = store.list(&filter, Pagination::default()).await.unwrap();
        assert_eq!(page.items[0].enrollments, 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_keeps_absent_fields() {
        let store = store().await;
        let title = Uuid::new_v4().to_string();
        let id = store.insert(new_course(&title)).await.unwrap();

        let changes = CourseChanges::new(
            None,
            Some(CourseDescription::new("A longer description").unwrap()),
        )
        .unwrap();
        let course = store.update(id, &changes).await.unwrap().expect("updated");

        assert_eq!(course.title, title);
        assert_eq!(course.description.as_deref(), Some("A longer description"));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_course_returns_none() {
        let store = store().await;
        let changes = CourseChanges::new(Some(CourseTitle::new("Nobody home").unwrap()), None).unwrap();

        let result = store.update(Uuid::new_v4(), &changes).await.unwrap();
        assert!(result.is_none());
    }
}
