use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::database::MongoDB;
use crate::services::resource_service;
use crate::utils::error::AppError;
use crate::utils::json::{bson_to_json, document_to_json};

const COLLECTION: &str = "users";

#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "All users"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("👤 GET /api/users");

    let users = resource_service::list(&db, COLLECTION).await?;
    let payload: Vec<Value> = users.into_iter().map(document_to_json).collect();
    Ok(HttpResponse::Ok().json(payload))
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "Numeric id or ObjectId hex string")),
    responses(
        (status = 200, description = "The matching user"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("👤 GET /api/users/{}", id);

    let user = resource_service::find_by_id(&db, COLLECTION, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
    Ok(HttpResponse::Ok().json(document_to_json(user)))
}

/// Schema-less insert, separate from the typed register flow. Whatever
/// fields the caller submits are stored as-is.
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 201, description = "User document created"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_user(
    db: web::Data<MongoDB>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("👤 POST /api/users");

    let body = body.into_inner();
    let inserted_id = resource_service::insert(&db, COLLECTION, &body).await?;

    let mut payload = serde_json::Map::new();
    payload.insert("success".to_string(), Value::Bool(true));
    payload.insert("insertedId".to_string(), bson_to_json(inserted_id));
    if let Value::Object(fields) = body {
        payload.extend(fields);
    }

    Ok(HttpResponse::Created().json(Value::Object(payload)))
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "Numeric id or ObjectId hex string")),
    responses(
        (status = 200, description = "User updated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("👤 PUT /api/users/{}", id);

    let matched = resource_service::update_by_id(&db, COLLECTION, &id, &body).await?;
    if !matched {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "User updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "Numeric id or ObjectId hex string")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("👤 DELETE /api/users/{}", id);

    let deleted = resource_service::delete_by_id(&db, COLLECTION, &id).await?;
    if !deleted {
        return Err(AppError::NotFound("User not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "User deleted successfully"
    })))
}
