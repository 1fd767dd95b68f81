use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct StatusDoc {
    pub status: String,
    pub id: Option<i32>,
}

#[derive(ToSchema)]
pub struct MessageDoc { pub message: String }

#[derive(ToSchema)]
pub struct ActivityInputDoc {
    pub title: String,
    /// `TASK` or `EVENT` under strict validation
    pub category: String,
    pub description: String,
    /// RFC 3339 timestamp
    pub activity_date: String,
}

#[derive(ToSchema)]
pub struct ActivityDoc {
    pub id: i32,
    pub title: String,
    pub category: String,
    pub description: String,
    pub activity_date: String,
    pub status: String,
    pub created_at: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::activities::list,
        crate::routes::activities::create,
        crate::routes::activities::update,
        crate::routes::activities::delete,
    ),
    components(
        schemas(
            HealthResponse,
            StatusDoc,
            MessageDoc,
            ActivityInputDoc,
            ActivityDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "activities")
    )
)]
pub struct ApiDoc;
