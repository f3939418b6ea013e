mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let mongodb_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");

    log::info!("🌱 Starting Green Garden API...");

    // Initialize MongoDB connection
    let db = database::MongoDB::new(&mongodb_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db);

    log::info!("✅ MongoDB connected successfully");
    log::info!("🌐 Server starting on {}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // The original frontend is served from arbitrary hosts, so CORS
        // stays wide open here
        let cors = Cors::permissive();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            // Liveness & health
            .route("/", web::get().to(api::health::index))
            .route("/health", web::get().to(api::health::health_check))
            .service(
                web::scope("/api")
                    // ==================== TIPS ====================
                    .route("/tips", web::get().to(api::tips::get_tips))
                    .route("/tips", web::post().to(api::tips::create_tip))
                    .route("/tips/{id}", web::get().to(api::tips::get_tip))
                    .route("/tips/{id}", web::put().to(api::tips::update_tip))
                    .route("/tips/{id}", web::delete().to(api::tips::delete_tip))
                    // ==================== USERS ====================
                    .route("/users", web::get().to(api::users::get_users))
                    .route("/users", web::post().to(api::users::create_user))
                    .route("/users/{id}", web::get().to(api::users::get_user))
                    .route("/users/{id}", web::put().to(api::users::update_user))
                    .route("/users/{id}", web::delete().to(api::users::delete_user))
                    // ==================== AUTH ====================
                    .route("/register", web::post().to(api::auth::register))
                    .route("/login", web::post().to(api::auth::login)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
