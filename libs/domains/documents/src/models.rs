use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

/// Reserved key holding a document's identifier
pub const ID_FIELD: &str = "_id";

/// Collections served by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CollectionName {
    Events,
    Registrations,
}

/// A stored record: a store-assigned id plus arbitrary fields.
///
/// On the wire the id is `_id` as a 24-character hex string and every other
/// field sits next to it at the top level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[schema(example = json!({
    "_id": "507f1f77bcf86cd799439011",
    "title": "Rust meetup",
    "email": "ana@example.com"
}))]
pub struct Document {
    #[serde(rename = "_id", with = "object_id_hex")]
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub id: ObjectId,

    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub fields: Map<String, Value>,
}

impl Document {
    pub fn new(id: ObjectId, fields: DocumentFields) -> Self {
        Self {
            id,
            fields: fields.into_inner(),
        }
    }
}

/// Client-supplied fields for a create or update.
///
/// Building one drops `_id` and any dotted path into it, so a client can
/// never choose or change a document's identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(from = "Map<String, Value>")]
#[schema(value_type = Object, example = json!({"title": "Rust meetup", "seats": 40}))]
pub struct DocumentFields(Map<String, Value>);

impl DocumentFields {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// `_id` itself or a dotted path into it, such as `_id.x`.
fn targets_id(key: &str) -> bool {
    key.strip_prefix(ID_FIELD)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('.'))
}

impl From<Map<String, Value>> for DocumentFields {
    fn from(mut fields: Map<String, Value>) -> Self {
        fields.retain(|key, _| !targets_id(key));
        Self(fields)
    }
}

/// Result of an insert, shaped like the MongoDB driver's `InsertOneResult`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InsertAck {
    pub acknowledged: bool,
    #[serde(with = "object_id_hex")]
    #[schema(value_type = String, example = "507f1f77bcf86cd799439011")]
    pub inserted_id: ObjectId,
}

impl InsertAck {
    pub fn new(inserted_id: ObjectId) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

/// Result of an update. Upserts are never requested, so `upsertedCount` is
/// always 0 and `upsertedId` always null.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAck {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
    pub upserted_count: u64,
    pub upserted_id: Option<String>,
}

impl UpdateAck {
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count,
            modified_count,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

/// Result of a delete; `deletedCount` is 0 when nothing matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAck {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteAck {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}

/// (De)serialize an ObjectId as its plain hex string.
pub(crate) mod object_id_hex {
    use mongodb::bson::oid::ObjectId;
    use serde::{Deserialize, Deserializer, Serializer, de::Error};

    pub fn serialize<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&id.to_hex())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ObjectId, D::Error> {
        let hex = String::deserialize(deserializer)?;
        ObjectId::parse_str(&hex).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_serializes_flat_with_hex_id() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        let fields: DocumentFields = serde_json::from_value(json!({"title": "Rust meetup"})).unwrap();
        let doc = Document::new(id, fields);

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"_id": "507f1f77bcf86cd799439011", "title": "Rust meetup"})
        );
    }

    #[test]
    fn test_document_round_trips_from_wire() {
        let doc: Document = serde_json::from_value(json!({
            "_id": "507f1f77bcf86cd799439011",
            "title": "Rust meetup",
            "seats": 40
        }))
        .unwrap();

        assert_eq!(doc.id.to_hex(), "507f1f77bcf86cd799439011");
        assert_eq!(doc.fields.len(), 2);
        assert!(!doc.fields.contains_key("_id"));
    }

    #[test]
    fn test_fields_strip_client_id() {
        let fields: DocumentFields = serde_json::from_value(json!({
            "_id": "000000000000000000000000",
            "name": "Bob"
        }))
        .unwrap();

        assert_eq!(fields.len(), 1);
        assert!(!fields.as_map().contains_key(ID_FIELD));
    }

    #[test]
    fn test_fields_strip_dotted_id_paths() {
        let fields: DocumentFields = serde_json::from_value(json!({
            "_id.x": 1,
            "_id.nested.y": 2,
            "_idle": true,
            "status": "confirmed"
        }))
        .unwrap();

        assert_eq!(fields.len(), 2);
        assert!(fields.as_map().contains_key("_idle"));
        assert!(fields.as_map().contains_key("status"));
    }

    #[test]
    fn test_fields_only_id_is_empty() {
        let fields: DocumentFields =
            serde_json::from_value(json!({"_id": "507f1f77bcf86cd799439011"})).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_fields_reject_non_object() {
        assert!(serde_json::from_value::<DocumentFields>(json!([1, 2])).is_err());
    }

    #[test]
    fn test_update_ack_wire_shape() {
        assert_eq!(
            serde_json::to_value(UpdateAck::new(1, 0)).unwrap(),
            json!({
                "acknowledged": true,
                "matchedCount": 1,
                "modifiedCount": 0,
                "upsertedCount": 0,
                "upsertedId": null
            })
        );
    }

    #[test]
    fn test_insert_and_delete_ack_wire_shape() {
        let id = ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap();
        assert_eq!(
            serde_json::to_value(InsertAck::new(id)).unwrap(),
            json!({"acknowledged": true, "insertedId": "507f1f77bcf86cd799439011"})
        );
        assert_eq!(
            serde_json::to_value(DeleteAck::new(0)).unwrap(),
            json!({"acknowledged": true, "deletedCount": 0})
        );
    }

    #[test]
    fn test_collection_names() {
        assert_eq!(CollectionName::Events.as_ref(), "events");
        assert_eq!(CollectionName::Registrations.to_string(), "registrations");
        assert_eq!(
            "registrations".parse::<CollectionName>().unwrap(),
            CollectionName::Registrations
        );
    }
}
