use mongodb::bson::{oid::ObjectId, DateTime as BsonDateTime};
use serde::{Deserialize, Serialize};

/// User document in the `users` collection.
///
/// Seed documents predate the API and may carry a legacy numeric `id` and
/// lack `createdAt`; documents inserted through the schema-less create
/// route can be missing almost anything, so every field the typed paths
/// read is optional except `email`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub _id: Option<ObjectId>,
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub legacy_id: Option<i64>,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<BsonDateTime>,
}

/// Reduced view returned by login. Never carries the password.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct UserInfo {
    pub id: String,
    pub name: Option<String>,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_deserializes_legacy_seed_document() {
        // Seed rows have a numeric id and no createdAt
        let document = doc! {
            "id": 7_i64,
            "email": "rosa@greengarden.io",
            "password": "hunter2",
            "name": "Rosa",
        };
        let user: User = mongodb::bson::from_document(document).unwrap();
        assert_eq!(user.legacy_id, Some(7));
        assert!(user._id.is_none());
        assert!(user.created_at.is_none());
    }

    #[test]
    fn test_user_info_has_no_password_field() {
        let info = UserInfo {
            id: ObjectId::new().to_hex(),
            name: Some("Rosa".to_string()),
            email: "rosa@greengarden.io".to_string(),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["email"], "rosa@greengarden.io");
    }
}
