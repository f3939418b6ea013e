use actix_web::{web, HttpResponse};

use crate::database::MongoDB;
use crate::services::auth_service;
use crate::services::auth_service::{LoginRequest, RegisterRequest};
use crate::utils::error::AppError;

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "Auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", body = auth_service::RegisterResponse),
        (status = 400, description = "User already exists with this email")
    )
)]
pub async fn register(
    db: web::Data<MongoDB>,
    request: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("📝 POST /api/register - email: {}", request.email);

    match auth_service::register(&db, &request).await {
        Ok(response) => {
            log::info!("✅ Registration successful: {}", request.email);
            Ok(HttpResponse::Created().json(response))
        }
        Err(e) => {
            log::warn!("❌ Registration failed: {} - {}", request.email, e);
            Err(e)
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/login",
    tag = "Auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = auth_service::LoginResponse),
        (status = 401, description = "Invalid email or password")
    )
)]
pub async fn login(
    db: web::Data<MongoDB>,
    request: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    log::info!("🔐 POST /api/login - email: {}", request.email);

    match auth_service::login(&db, &request).await {
        Ok(response) => {
            log::info!("✅ Login successful: {}", request.email);
            Ok(HttpResponse::Ok().json(response))
        }
        Err(e) => {
            log::warn!("❌ Login failed: {} - {}", request.email, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    async fn test_db() -> MongoDB {
        dotenv::dotenv().ok();
        let uri = std::env::var("MONGODB_URI")
            .unwrap_or_else(|_| "mongodb://localhost:27017/greenGarden".to_string());
        MongoDB::new(&uri).await.expect("MongoDB connection")
    }

    fn unique_email(tag: &str) -> String {
        format!("{}+{}@greengarden.io", tag, chrono::Utc::now().timestamp_millis())
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_second_registration_with_same_email_conflicts() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_db().await))
                .route("/api/register", web::post().to(register)),
        )
        .await;

        let body = serde_json::json!({
            "email": unique_email("twice"),
            "password": "compost123",
            "name": "Rosa",
        });

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(&body)
            .to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), 201);

        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(&body)
            .to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), 400);
        let payload: Value = test::read_body_json(response).await;
        assert_eq!(payload["message"], "User already exists with this email");
    }

    #[actix_web::test]
    #[ignore] // Requires MongoDB to be running
    async fn test_login_responses_never_leak_the_password() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_db().await))
                .route("/api/register", web::post().to(register))
                .route("/api/login", web::post().to(login)),
        )
        .await;

        let email = unique_email("login");
        let req = test::TestRequest::post()
            .uri("/api/register")
            .set_json(serde_json::json!({
                "email": email,
                "password": "compost123",
                "name": "Rosa",
            }))
            .to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), 201);

        // Wrong password: 401, generic message, no user view
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "email": email, "password": "wrong" }))
            .to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), 401);
        let payload: Value = test::read_body_json(response).await;
        assert_eq!(payload["message"], "Invalid email or password");
        assert!(payload.get("user").is_none());

        // Correct credentials: reduced user view, password absent anywhere
        let req = test::TestRequest::post()
            .uri("/api/login")
            .set_json(serde_json::json!({ "email": email, "password": "compost123" }))
            .to_request();
        let response = test::call_service(&app, req).await;
        assert_eq!(response.status(), 200);
        let raw = test::read_body(response).await;
        let text = std::str::from_utf8(&raw).unwrap();
        assert!(!text.contains("password"));
        let payload: Value = serde_json::from_str(text).unwrap();
        assert_eq!(payload["user"]["email"], Value::String(email));
        assert!(payload["user"]["id"].as_str().is_some());
    }
}
