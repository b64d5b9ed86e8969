//! Course endpoints
//!
//! - POST /courses - create (title only is persisted)
//! - GET /courses - list with title filter, pagination and enrollment counts
//! - GET /courses/{id} - fetch one
//! - PATCH /courses/{id} - partial update with `{success, ...}` envelope

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::db::StoreError;
use crate::http::error::{ApiError, INTERNAL_ERROR_MESSAGE};
use crate::http::extractors::{ValidJson, ValidQuery, ValidUuid};
use crate::http::schemas::{CourseSchema, CourseSummarySchema, ErrorSchema};
use crate::http::server::AppState;
use crate::models::{
    Course, CourseChanges, CourseDescription, CourseFilter, CourseSummary, CourseTitle, NewCourse,
    Pagination, ValidationError,
};

const COURSE: &str = "Course";

/// Create course request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCourseRequest {
    #[schema(min_length = 5, example = "Intro to Rust")]
    pub title: String,
    /// Accepted but not stored
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<NewCourse, ValidationError> {
        Ok(NewCourse {
            title: CourseTitle::new(&self.title)?,
        })
    }
}

/// Create course response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedCourseResponse {
    pub course: Uuid,
}

/// List query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListCoursesQuery {
    /// Case-insensitive substring of the title
    pub title: Option<String>,
    /// 1-based page number, 10 courses per page
    pub page: Option<u32>,
}

/// Course list response
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseListResponse {
    #[schema(value_type = Vec<CourseSummarySchema>)]
    pub courses: Vec<CourseSummary>,
    pub total_pages: u32,
}

/// Partial update request, at least one field required
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateCourseRequest {
    #[serde(default)]
    #[schema(min_length = 5)]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(min_length = 10)]
    pub description: Option<String>,
}

impl UpdateCourseRequest {
    pub fn validate(&self) -> Result<CourseChanges, ValidationError> {
        let title = self.title.as_deref().map(CourseTitle::new).transpose()?;
        let description = self
            .description
            .as_deref()
            .map(CourseDescription::new)
            .transpose()?;

        CourseChanges::new(title, description)
    }
}

/// Successful update response
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdatedCourseResponse {
    pub success: bool,
    #[schema(value_type = String, example = "Course updated successfully")]
    pub message: &'static str,
    #[schema(value_type = CourseSchema)]
    pub course: Course,
}

/// Failure envelope used by the update route
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateFailure {
    pub success: bool,
    #[schema(example = "Course not found")]
    pub error: String,
}

/// Update route errors, rendered as `{success: false, error}`
#[derive(Debug)]
pub enum UpdateCourseError {
    /// Bad id or body (400)
    Invalid(ValidationError),

    /// No course with that id (404)
    NotFound,

    /// The update statement matched no row (500)
    NotUpdated,

    /// Store failure (500, logged)
    Store(StoreError),
}

impl IntoResponse for UpdateCourseError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Invalid(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::NotFound => (StatusCode::NOT_FOUND, format!("{} not found", COURSE)),
            Self::NotUpdated => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update course".to_owned(),
            ),
            Self::Store(e) => {
                tracing::error!("Error updating course: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
        };

        let body = UpdateFailure {
            success: false,
            error,
        };
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for UpdateCourseError {
    fn from(e: ValidationError) -> Self {
        Self::Invalid(e)
    }
}

impl From<StoreError> for UpdateCourseError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<ApiError> for UpdateCourseError {
    fn from(e: ApiError) -> Self {
        match e {
            ApiError::Validation(e) => Self::Invalid(e),
            ApiError::NotFound { .. } => Self::NotFound,
            ApiError::Store(e) => Self::Store(e),
        }
    }
}

/// POST /courses - create a course
#[utoipa::path(
    post,
    path = "/courses",
    tag = "courses",
    request_body = CreateCourseRequest,
    responses(
        (status = 201, description = "Course created", body = CreatedCourseResponse),
        (status = 400, description = "Invalid body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    )
)]
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateCourseRequest>,
) -> Result<(StatusCode, Json<CreatedCourseResponse>), ApiError> {
    let course = req.validate()?;
    if req.description.is_some() {
        tracing::debug!("description supplied on create is not persisted");
    }

    let id = state.store.insert(course).await?;
    tracing::info!(course_id = %id, "course created");

    Ok((StatusCode::CREATED, Json(CreatedCourseResponse { course: id })))
}

/// GET /courses - list courses with enrollment counts
#[utoipa::path(
    get,
    path = "/courses",
    tag = "courses",
    params(ListCoursesQuery),
    responses(
        (status = 200, description = "One page of courses", body = CourseListResponse),
        (status = 400, description = "Malformed query", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    )
)]
pub async fn list_courses(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<ListCoursesQuery>,
) -> Result<Json<CourseListResponse>, ApiError> {
    let filter = CourseFilter::new(query.title);
    let page = Pagination::new(query.page.unwrap_or(1));
    let result = state.store.list(&filter, page).await?;

    Ok(Json(CourseListResponse {
        total_pages: result.total_pages(),
        courses: result.items,
    }))
}

/// GET /courses/{id} - get a single course
#[utoipa::path(
    get,
    path = "/courses/{id}",
    tag = "courses",
    params(("id" = Uuid, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = CourseSchema),
        (status = 400, description = "Malformed id", body = ErrorSchema),
        (status = 404, description = "No such course", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    )
)]
pub async fn get_course(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<Course>, ApiError> {
    let course = state
        .store
        .find(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: COURSE,
            id: id.to_string(),
        })?;

    Ok(Json(course))
}

/// PATCH /courses/{id} - update the fields present in the body
#[utoipa::path(
    patch,
    path = "/courses/{id}",
    tag = "courses",
    params(("id" = Uuid, Path, description = "Course id")),
    request_body = UpdateCourseRequest,
    responses(
        (status = 200, description = "Course updated", body = UpdatedCourseResponse),
        (status = 400, description = "Malformed id or invalid body", body = UpdateFailure),
        (status = 404, description = "No such course", body = UpdateFailure),
        (status = 500, description = "Update failed", body = UpdateFailure)
    )
)]
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    id: Result<ValidUuid, ApiError>,
    body: Result<ValidJson<UpdateCourseRequest>, ApiError>,
) -> Result<Json<UpdatedCourseResponse>, UpdateCourseError> {
    let ValidUuid(id) = id?;
    let ValidJson(req) = body?;
    let changes = req.validate()?;

    if state.store.find(id).await?.is_none() {
        tracing::debug!(course_id = %id, "update target not found");
        return Err(UpdateCourseError::NotFound);
    }

    let course = state
        .store
        .update(id, &changes)
        .await?
        .ok_or(UpdateCourseError::NotUpdated)?;
    tracing::info!(course_id = %id, "course updated");

    Ok(Json(UpdatedCourseResponse {
        success: true,
        message: "Course updated successfully",
        course,
    }))
}

/// Course routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", get(get_course).patch(update_course))
}
