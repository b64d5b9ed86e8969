//! Demo data seeding
//!
//! Inserts a handful of users and courses with fake content, then enrolls
//! users into the courses. Everything runs in one transaction.

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;
use sqlx::PgPool;
use uuid::Uuid;

use super::StoreError;

/// Users created per seed run
const SEED_USERS: usize = 3;

/// Courses created per seed run
const SEED_COURSES: usize = 2;

/// Enrollments as (course index, user index)
const ENROLLMENT_PLAN: [(usize, usize); 3] = [(0, 0), (0, 1), (1, 2)];

/// Generated user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
}

/// Generated course row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedCourse {
    pub title: String,
    pub description: String,
}

/// Fake data for one seed run
#[derive(Debug, Clone)]
pub struct SeedData {
    pub users: Vec<SeedUser>,
    pub courses: Vec<SeedCourse>,
}

impl SeedData {
    /// Generate users (full name, email) and courses (4-word title,
    /// 6-word description).
    pub fn generate() -> Self {
        let users = (0..SEED_USERS)
            .map(|_| SeedUser {
                name: Name().fake(),
                email: SafeEmail().fake(),
            })
            .collect();

        let courses = (0..SEED_COURSES)
            .map(|_| SeedCourse {
                title: lorem_words(4),
                description: lorem_words(6),
            })
            .collect();

        Self { users, courses }
    }
}

fn lorem_words(count: usize) -> String {
    let words: Vec<String> = Words(count..count + 1).fake();
    words.join(" ")
}

/// Rows written by a seed run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub users: usize,
    pub courses: usize,
    pub enrollments: usize,
}

/// Insert `data` and the fixed enrollment plan.
///
/// Users are upserted on email so a repeated run with a colliding fake
/// address reuses the existing row.
pub async fn seed(pool: &PgPool, data: &SeedData) -> Result<SeedSummary, StoreError> {
    let mut tx = pool.begin().await?;

    let mut user_ids = Vec::with_capacity(data.users.len());
    for user in &data.users {
        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO users (name, email) VALUES ($1, $2)
            ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
            RETURNING id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .fetch_one(&mut *tx)
        .await?;
        user_ids.push(id);
    }

    let mut course_ids = Vec::with_capacity(data.courses.len());
    for course in &data.courses {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO courses (title, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&course.title)
        .bind(&course.description)
        .fetch_one(&mut *tx)
        .await?;
        course_ids.push(id);
    }

    let mut enrollments = 0;
    for (course_idx, user_idx) in ENROLLMENT_PLAN {
        let (Some(course_id), Some(user_id)) = (course_ids.get(course_idx), user_ids.get(user_idx))
        else {
            continue;
        };

        let result = sqlx::query(
            r#"
            INSERT INTO enrollments (course_id, user_id) VALUES ($1, $2)
            ON CONFLICT (course_id, user_id) DO NOTHING
            "#,
        )
        .bind(course_id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;
        enrollments += result.rows_affected() as usize;
    }

    tx.commit().await?;

    Ok(SeedSummary {
        users: user_ids.len(),
        courses: course_ids.len(),
        enrollments,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{CourseStore, PgCourseStore};
    use crate::models::{CourseFilter, CourseTitle, Pagination};

    #[test]
    fn generates_expected_shape() {
        let data = SeedData::generate();
        assert_eq!(data.users.len(), SEED_USERS);
        assert_eq!(data.courses.len(), SEED_COURSES);
    }

    #[test]
    fn generated_titles_are_valid() {
        for course in SeedData::generate().courses {
            assert_eq!(course.title.split(' ').count(), 4);
            assert!(CourseTitle::new(&course.title).is_ok(), "{}", course.title);
            assert_eq!(course.description.split(' ').count(), 6);
        }
    }

    #[test]
    fn generated_emails_look_like_emails() {
        for user in SeedData::generate().users {
            assert!(user.email.contains('@'), "{}", user.email);
            assert!(!user.name.is_empty());
        }
    }

    #[test]
    fn enrollment_plan_fits_generated_rows() {
        for (course_idx, user_idx) in ENROLLMENT_PLAN {
            assert!(course_idx < SEED_COURSES);
            assert!(user_idx < SEED_USERS);
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seed_inserts_all_rows() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::run_migrations(&pool).await.expect("migrations failed");

        let summary = seed(&pool, &SeedData::generate()).await.unwrap();
        assert_eq!(
            summary,
            SeedSummary {
                users: 3,
                courses: 2,
                enrollments: 3
            }
        );
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn seeded_courses_list_in_insertion_order() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::run_migrations(&pool).await.expect("migrations failed");
        let store = PgCourseStore::new(pool.clone());

        // Both courses share one transaction, hence one NOW().
        for _ in 0..20 {
            let tag = Uuid::new_v4().to_string();
            let mut data = SeedData::generate();
            data.courses[0].title = format!("{tag} first");
            data.courses[1].title = format!("{tag} second");
            seed(&pool, &data).await.unwrap();

            let page = store
                .list(&CourseFilter::new(Some(format!("{tag} "))), Pagination::default())
                .await
                .unwrap();
            let titles: Vec<_> = page.items.iter().map(|c| c.title.as_str()).collect();
            assert_eq!(titles, [format!("{tag} first"), format!("{tag} second")]);
        }
    }
}
