//! Data-transfer record for the external service catalog. Pure shape, no
//! behavior; identity is the catalog id alone.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTag {
    pub name: String,
}

/// One catalog entry as the service API serializes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogService {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "android_bundle_id", default)]
    pub bundle_id: Option<String>,
    #[serde(default)]
    pub tags: Vec<ServiceTag>,
}

impl PartialEq for CatalogService {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CatalogService {}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service(id: i64, name: &str) -> CatalogService {
        CatalogService {
            id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            description: None,
            bundle_id: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn equality_is_by_id_only() {
        assert_eq!(service(1, "Chat"), service(1, "Voice"));
        assert_ne!(service(1, "Chat"), service(2, "Chat"));
    }

    #[test]
    fn deserializes_the_wire_shape() {
        let value = json!({
            "id": 7,
            "name": "Chat",
            "slug": "chat",
            "description": "Messaging bundle",
            "android_bundle_id": "net.example.chat",
            "tags": [{ "name": "social" }]
        });
        let parsed: CatalogService = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed.id, 7);
        assert_eq!(parsed.bundle_id.as_deref(), Some("net.example.chat"));
        assert_eq!(parsed.tags.len(), 1);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let value = json!({ "id": 3, "name": "Data", "slug": "data" });
        let parsed: CatalogService = serde_json::from_value(value).expect("deserialize");
        assert_eq!(parsed.description, None);
        assert_eq!(parsed.bundle_id, None);
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn serializes_with_the_wire_field_name() {
        let mut entry = service(1, "Chat");
        entry.bundle_id = Some("net.example.chat".to_string());
        let value = serde_json::to_value(&entry).expect("serialize");
        assert_eq!(value["android_bundle_id"], "net.example.chat");
    }
}
