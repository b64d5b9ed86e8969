//! OpenAPI document and Swagger UI
//!
//! Served at `/docs` when `ServerConfig::docs` is set, which is the default
//! in debug builds. The raw document lives at [`OPENAPI_JSON_PATH`].

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::routes::{courses, health};
use super::schemas::{CourseSchema, CourseSummarySchema, ErrorSchema};

/// Swagger UI mount point
pub const DOCS_PATH: &str = "/docs";

/// Path of the generated OpenAPI JSON
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// OpenAPI document for the courses API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Courses API",
        description = "Create, list, fetch and update courses. Listing includes enrollment counts."
    ),
    paths(
        courses::create_course,
        courses::list_courses,
        courses::get_course,
        courses::update_course,
        health::health,
    ),
    components(schemas(
        CourseSchema,
        CourseSummarySchema,
        ErrorSchema,
        courses::CreateCourseRequest,
        courses::CreatedCourseResponse,
        courses::CourseListResponse,
        courses::UpdateCourseRequest,
        courses::UpdatedCourseResponse,
        courses::UpdateFailure,
        health::HealthResponse,
    )),
    tags(
        (name = "courses", description = "Course operations"),
        (name = "health", description = "Liveness check")
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document it reads.
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().merge(SwaggerUi::new(DOCS_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        let courses = paths.get("/courses").expect("/courses documented");
        assert!(courses.get.is_some());
        assert!(courses.post.is_some());

        let course = paths.get("/courses/{id}").expect("/courses/{id} documented");
        assert!(course.get.is_some());
        assert!(course.patch.is_some());

        assert!(paths.contains_key("/health"));
    }

    #[test]
    fn list_response_uses_camel_case() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let list = &doc["components"]["schemas"]["CourseListResponse"]["properties"];

        assert!(list.get("totalPages").is_some());
        assert!(list.get("total_pages").is_none());
    }

    #[test]
    fn list_query_parameters_are_optional() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let params = doc["paths"]["/courses"]["get"]["parameters"]
            .as_array()
            .expect("list parameters");

        let names: Vec<_> = params.iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, ["title", "page"]);
        assert!(params.iter().all(|p| p["in"] == "query" && p["required"] != true));
    }
}
