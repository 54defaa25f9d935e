use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Метки времени, которые проставляет backend
///
/// Клиент их только читает; при создании записи поля не отправляются.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Timestamps {
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Timestamps {
    /// "YYYY-MM-DD HH:MM" or "-" when the server did not send it
    pub fn created_display(&self) -> String {
        self.created_at
            .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
