use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Green Garden API",
        version = "1.0.0",
        description = "CRUD API over the gardening tips and users collections, plus registration and login. Documents are addressable by their legacy numeric `id` or their ObjectId hex string."
    ),
    paths(
        // Auth endpoints
        crate::api::auth::register,
        crate::api::auth::login,

        // Health
        crate::api::health::health_check,

        // Tips
        crate::api::tips::get_tips,
        crate::api::tips::get_tip,
        crate::api::tips::create_tip,
        crate::api::tips::update_tip,
        crate::api::tips::delete_tip,

        // Users
        crate::api::users::get_users,
        crate::api::users::get_user,
        crate::api::users::create_user,
        crate::api::users::update_user,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::services::auth_service::RegisterRequest,
            crate::services::auth_service::LoginRequest,
            crate::services::auth_service::RegisterResponse,
            crate::services::auth_service::LoginResponse,
            crate::models::UserInfo,
            crate::api::health::HealthResponse,
        )
    ),
    tags(
        (name = "Tips", description = "Gardening tips collection. Schema-less documents, addressable by legacy numeric id or ObjectId."),
        (name = "Users", description = "Users collection. Schema-less create/update plus typed registration and login."),
        (name = "Auth", description = "Registration and login endpoints. No sessions or tokens; every request is stateless."),
        (name = "Health", description = "Liveness and health check endpoints."),
    )
)]
pub struct ApiDoc;
