use crate::domain::common::{Editable, Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Провинция — корень географической иерархии
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Province {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Province {
    pub fn new_for_insert(name: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            is_active: true,
            timestamps: Timestamps::default(),
        }
    }
}

impl Listable for Province {
    fn kind() -> ResourceKind {
        ResourceKind::Province
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Editable for Province {
    fn blank(_parent_id: Option<&str>) -> Self {
        Self::new_for_insert("")
    }

    fn set_label(&mut self, label: String) {
        self.name = label;
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_backend_shape() {
        let province: Province = serde_json::from_value(json!({
            "_id": "65f0c2",
            "name": "Western",
            "isActive": true,
            "createdAt": "2024-03-15T14:02:26Z",
            "__v": 0
        }))
        .unwrap();
        assert_eq!(province.id(), "65f0c2");
        assert!(province.is_active());
        assert_eq!(province.timestamps.created_display(), "2024-03-15 14:02");
    }

    #[test]
    fn insert_payload_has_no_id() {
        let value = serde_json::to_value(Province::new_for_insert("Uva")).unwrap();
        assert_eq!(value, json!({ "name": "Uva", "isActive": true }));
    }

    #[test]
    fn blank_name_fails_validation() {
        assert!(Province::blank(None).validate().is_err());
        assert!(Province::new_for_insert("Sabaragamuwa").validate().is_ok());
    }
}
