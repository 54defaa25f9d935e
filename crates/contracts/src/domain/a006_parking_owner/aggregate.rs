use crate::domain::common::{Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Статус заявки владельца парковки
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        }
    }

    pub fn display(self) -> &'static str {
        match self {
            ApprovalStatus::Pending => "Pending",
            ApprovalStatus::Approved => "Approved",
            ApprovalStatus::Rejected => "Rejected",
        }
    }
}

/// Владелец парковки. Регистрируется сам, админ одобряет заявку.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkingOwner {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nic: Option<String>,
    #[serde(rename = "approvalStatus", default)]
    pub approval_status: ApprovalStatus,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl ParkingOwner {
    pub fn is_pending(&self) -> bool {
        self.approval_status == ApprovalStatus::Pending
    }
}

impl Listable for ParkingOwner {
    fn kind() -> ResourceKind {
        ResourceKind::ParkingOwner
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

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_status_means_pending() {
        let owner: ParkingOwner =
            serde_json::from_value(json!({ "_id": "o1", "name": "Nimal", "isActive": false }))
                .unwrap();
        assert!(owner.is_pending());
    }

    #[test]
    fn status_uses_lowercase_wire_names() {
        let owner: ParkingOwner = serde_json::from_value(json!({
            "_id": "o2",
            "name": "Kamala",
            "approvalStatus": "approved",
            "isActive": true
        }))
        .unwrap();
        assert_eq!(owner.approval_status, ApprovalStatus::Approved);
        assert_eq!(
            serde_json::to_value(ApprovalStatus::Rejected).unwrap(),
            json!(ApprovalStatus::Rejected.as_str())
        );
    }
}
