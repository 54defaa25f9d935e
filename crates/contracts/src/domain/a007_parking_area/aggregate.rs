use crate::domain::common::{Editable, Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Парковочная площадка в городе
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkingArea {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "cityId", default)]
    pub city_id: String,
    #[serde(rename = "ownerId", default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Listable for ParkingArea {
    fn kind() -> ResourceKind {
        ResourceKind::ParkingArea
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

    fn parent_id(&self) -> Option<&str> {
        Some(&self.city_id)
    }
}

impl Editable for ParkingArea {
    fn blank(parent_id: Option<&str>) -> Self {
        Self {
            city_id: parent_id.unwrap_or_default().to_string(),
            is_active: true,
            ..Self::default()
        }
    }

    fn set_label(&mut self, label: String) {
        self.name = label;
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }
}
