use actix_web::{web, HttpResponse};
use serde_json::Value;

use crate::database::MongoDB;
use crate::services::resource_service;
use crate::utils::error::AppError;
use crate::utils::json::{bson_to_json, document_to_json};

const COLLECTION: &str = "tips";

#[utoipa::path(
    get,
    path = "/api/tips",
    tag = "Tips",
    responses(
        (status = 200, description = "All gardening tips"),
        (status = 500, description = "Database error")
    )
)]
pub async fn get_tips(db: web::Data<MongoDB>) -> Result<HttpResponse, AppError> {
    log::info!("🌿 GET /api/tips");

    let tips = resource_service::list(&db, COLLECTION).await?;
    let payload: Vec<Value> = tips.into_iter().map(document_to_json).collect();
    Ok(HttpResponse::Ok().json(payload))
}

#[utoipa::path(
    get,
    path = "/api/tips/{id}",
    tag = "Tips",
    params(("id" = String, Path, description = "Numeric id or ObjectId hex string")),
    responses(
        (status = 200, description = "The matching tip"),
        (status = 404, description = "Tip not found")
    )
)]
pub async fn get_tip(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🌿 GET /api/tips/{}", id);

    let tip = resource_service::find_by_id(&db, COLLECTION, &id)
        .await?
        .ok_or_else(|| AppError::NotFound("Tip not found".to_string()))?;
    Ok(HttpResponse::Ok().json(document_to_json(tip)))
}

#[utoipa::path(
    post,
    path = "/api/tips",
    tag = "Tips",
    responses(
        (status = 201, description = "Tip created"),
        (status = 500, description = "Database error")
    )
)]
pub async fn create_tip(
    db: web::Data<MongoDB>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    log::info!("🌿 POST /api/tips");

    let body = body.into_inner();
    let inserted_id = resource_service::insert(&db, COLLECTION, &body).await?;

    // Echo the submitted fields alongside the assigned identifier
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
    path = "/api/tips/{id}",
    tag = "Tips",
    params(("id" = String, Path, description = "Numeric id or ObjectId hex string")),
    responses(
        (status = 200, description = "Tip updated"),
        (status = 404, description = "Tip not found")
    )
)]
pub async fn update_tip(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: web::Json<Value>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🌿 PUT /api/tips/{}", id);

    let matched = resource_service::update_by_id(&db, COLLECTION, &id, &body).await?;
    if !matched {
        return Err(AppError::NotFound("Tip not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Tip updated successfully"
    })))
}

#[utoipa::path(
    delete,
    path = "/api/tips/{id}",
    tag = "Tips",
    params(("id" = String, Path, description = "Numeric id or ObjectId hex string")),
    responses(
        (status = 200, description = "Tip deleted"),
        (status = 404, description = "Tip not found")
    )
)]
pub async fn delete_tip(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    log::info!("🌿 DELETE /api/tips/{}", id);

    let deleted = resource_service::delete_by_id(&db, COLLECTION, &id).await?;
    if !deleted {
        return Err(AppError::NotFound("Tip not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "success": true,
        "message": "Tip deleted successfully"
    })))
}
