use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Converts a BSON document into plain JSON for API responses.
///
/// ObjectIds render as their hex string and datetimes as RFC 3339 instead
/// of the extended-JSON `{"$oid": ...}` / `{"$date": ...}` wrappers, so
/// clients see `_id` and `createdAt` as ordinary strings.
pub fn document_to_json(doc: Document) -> Value {
    Value::Object(
        doc.into_iter()
            .map(|(key, value)| (key, bson_to_json(value)))
            .collect(),
    )
}

/// Single-value counterpart of [`document_to_json`], used for fields like
/// a freshly assigned `insertedId`.
pub fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => dt
            .try_to_rfc3339_string()
            .map(Value::String)
            .unwrap_or(Value::Null),
        Bson::Document(doc) => document_to_json(doc),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId, DateTime};

    #[test]
    fn test_object_id_renders_as_hex_string() {
        let oid = ObjectId::new();
        let json = document_to_json(doc! { "_id": oid });
        assert_eq!(json["_id"], Value::String(oid.to_hex()));
    }

    #[test]
    fn test_datetime_renders_as_rfc3339() {
        let json = document_to_json(doc! { "createdAt": DateTime::from_millis(0) });
        assert_eq!(json["createdAt"].as_str(), Some("1970-01-01T00:00:00Z"));
    }

    #[test]
    fn test_scalars_stay_plain() {
        let json = document_to_json(doc! {
            "id": 42_i64,
            "title": "Water in the morning",
            "indoor": true,
        });
        assert_eq!(json["id"], Value::from(42));
        assert_eq!(json["title"], Value::from("Water in the morning"));
        assert_eq!(json["indoor"], Value::from(true));
    }

    #[test]
    fn test_nested_documents_and_arrays_convert() {
        let oid = ObjectId::new();
        let json = document_to_json(doc! {
            "tags": ["herbs", "shade"],
            "author": { "_id": oid, "name": "Rosa" },
        });
        assert_eq!(json["tags"][1], Value::from("shade"));
        assert_eq!(json["author"]["_id"], Value::String(oid.to_hex()));
    }
}
