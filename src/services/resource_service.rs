use crate::database::MongoDB;
use crate::utils::error::AppError;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use serde_json::Value;

/// Candidate filters for a path identifier, in probe order.
///
/// The resource space mixes legacy numeric `id` fields from seed data with
/// `_id` ObjectIds assigned by the store, and callers don't know which one
/// they hold. An integer identifier probes the `id` field first; a valid
/// ObjectId string probes `_id`. A string that is neither yields no
/// filters, which downstream reads as not-found rather than an error.
pub fn id_filters(id: &str) -> Vec<Document> {
    let mut filters = Vec::with_capacity(2);
    if let Ok(numeric) = id.parse::<i64>() {
        filters.push(doc! { "id": numeric });
    }
    if let Ok(object_id) = ObjectId::parse_str(id) {
        filters.push(doc! { "_id": object_id });
    }
    filters
}

/// Converts a JSON request body into a BSON document. Create and update
/// accept arbitrary fields, but the body must at least be an object.
fn body_to_document(body: &Value) -> Result<Document, AppError> {
    match body {
        Value::Object(_) => mongodb::bson::to_document(body)
            .map_err(|e| AppError::InvalidRequest(format!("Invalid request body: {}", e))),
        _ => Err(AppError::InvalidRequest(
            "Request body must be a JSON object".to_string(),
        )),
    }
}

pub async fn list(db: &MongoDB, collection: &str) -> Result<Vec<Document>, AppError> {
    let collection = db.collection::<Document>(collection);
    let cursor = collection.find(doc! {}).await?;
    let documents: Vec<Document> = cursor.try_collect().await?;
    Ok(documents)
}

pub async fn find_by_id(
    db: &MongoDB,
    collection: &str,
    id: &str,
) -> Result<Option<Document>, AppError> {
    let collection = db.collection::<Document>(collection);
    for filter in id_filters(id) {
        if let Some(document) = collection.find_one(filter).await? {
            return Ok(Some(document));
        }
    }
    Ok(None)
}

/// Inserts the submitted body as-is and returns the assigned `_id`.
pub async fn insert(db: &MongoDB, collection: &str, body: &Value) -> Result<Bson, AppError> {
    let document = body_to_document(body)?;
    let collection = db.collection::<Document>(collection);
    let result = collection.insert_one(document).await?;
    Ok(result.inserted_id)
}

/// Shallow `$set` merge of the submitted fields into the matching
/// document. Returns whether any document matched the write filter.
pub async fn update_by_id(
    db: &MongoDB,
    collection: &str,
    id: &str,
    body: &Value,
) -> Result<bool, AppError> {
    let fields = body_to_document(body)?;
    let collection = db.collection::<Document>(collection);
    for filter in id_filters(id) {
        let result = collection
            .update_one(filter, doc! { "$set": fields.clone() })
            .await?;
        if result.matched_count > 0 {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Removes exactly one matching document. Returns whether one was removed.
pub async fn delete_by_id(db: &MongoDB, collection: &str, id: &str) -> Result<bool, AppError> {
    let collection = db.collection::<Document>(collection);
    for filter in id_filters(id) {
        let result = collection.delete_one(filter).await?;
        if result.deleted_count > 0 {
            return Ok(true);
        }
    }
    Ok(false)
}
