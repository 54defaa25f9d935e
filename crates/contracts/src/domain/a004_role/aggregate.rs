use crate::domain::common::{Editable, Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Роль пользователя с набором разрешений
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Role {
    pub fn permissions_display(&self) -> String {
        if self.permissions.is_empty() {
            "-".to_string()
        } else {
            self.permissions.join(", ")
        }
    }
}

impl Listable for Role {
    fn kind() -> ResourceKind {
        ResourceKind::Role
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

impl Editable for Role {
    fn blank(_parent_id: Option<&str>) -> Self {
        Self {
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
