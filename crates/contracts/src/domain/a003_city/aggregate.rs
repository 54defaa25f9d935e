use crate::domain::common::{Editable, Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Город, принадлежит району
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct City {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "districtId")]
    pub district_id: String,
    #[serde(rename = "postalCode", default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Listable for City {
    fn kind() -> ResourceKind {
        ResourceKind::City
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
        Some(&self.district_id)
    }
}

impl Editable for City {
    fn blank(parent_id: Option<&str>) -> Self {
        Self {
            district_id: parent_id.unwrap_or_default().to_string(),
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

    fn validate(&self) -> Result<(), String> {
        self.check_label()?;
        if self.district_id.trim().is_empty() {
            return Err("City must belong to a district".into());
        }
        Ok(())
    }
}
