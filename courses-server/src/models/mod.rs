//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod course;
pub mod pagination;
pub mod validation;

pub use course::{
    Course, CourseChanges, CourseDescription, CourseFilter, CourseSummary, CourseTitle, NewCourse,
};
pub use pagination::{Paginated, Pagination, COURSES_PER_PAGE};
pub use validation::ValidationError;
