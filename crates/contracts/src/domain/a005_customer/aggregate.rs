use crate::domain::common::{Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Клиент (пользователь мобильного приложения)
///
/// Создаётся самим пользователем при регистрации, поэтому из админки
/// доступны только просмотр, блокировка и удаление.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(rename = "roleId", default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Listable for Customer {
    fn kind() -> ResourceKind {
        ResourceKind::Customer
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
