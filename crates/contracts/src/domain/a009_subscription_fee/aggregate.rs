use crate::domain::common::{Editable, Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Тариф подписки для владельцев парковок
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriptionFee {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(rename = "planName")]
    pub plan_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(rename = "durationDays", default)]
    pub duration_days: u32,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl SubscriptionFee {
    pub fn amount_display(&self) -> String {
        format!("LKR {:.2}", self.amount)
    }
}

impl Listable for SubscriptionFee {
    fn kind() -> ResourceKind {
        ResourceKind::SubscriptionFee
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.plan_name
    }

    fn is_active(&self) -> bool {
        self.is_active
    }
}

impl Editable for SubscriptionFee {
    fn blank(_parent_id: Option<&str>) -> Self {
        Self {
            duration_days: 30,
            is_active: true,
            ..Self::default()
        }
    }

    fn set_label(&mut self, label: String) {
        self.plan_name = label;
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn validate(&self) -> Result<(), String> {
        if self.plan_name.trim().is_empty() {
            return Err("Plan name must not be empty".into());
        }
        if self.amount < 0.0 {
            return Err("Amount must not be negative".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_amount_is_rejected() {
        let mut fee = SubscriptionFee::blank(None);
        fee.set_label("Monthly".into());
        fee.amount = -1.0;
        assert!(fee.validate().is_err());
        fee.amount = 1500.0;
        assert!(fee.validate().is_ok());
        assert_eq!(fee.amount_display(), "LKR 1500.00");
    }
}
