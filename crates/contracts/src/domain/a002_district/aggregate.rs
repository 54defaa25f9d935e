use crate::domain::common::{Editable, Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Район, принадлежит провинции
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct District {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    #[serde(rename = "provinceId")]
    pub province_id: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl District {
    pub fn new_for_insert(name: impl Into<String>, province_id: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            province_id: province_id.into(),
            is_active: true,
            timestamps: Timestamps::default(),
        }
    }
}

impl Listable for District {
    fn kind() -> ResourceKind {
        ResourceKind::District
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
        Some(&self.province_id)
    }
}

impl Editable for District {
    fn blank(parent_id: Option<&str>) -> Self {
        Self::new_for_insert("", parent_id.unwrap_or_default())
    }

    fn set_label(&mut self, label: String) {
        self.name = label;
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn validate(&self) -> Result<(), String> {
        self.check_label()?;
        if self.province_id.trim().is_empty() {
            return Err("District must belong to a province".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_scoped_to_parent() {
        let district = District::blank(Some("p1"));
        assert_eq!(district.parent_id(), Some("p1"));
        assert!(district.is_active());
    }

    #[test]
    fn blank_name_is_checked_before_the_province() {
        let district = District::new_for_insert("  ", "");
        assert_eq!(
            district.validate(),
            Err(format!(
                "{} name must not be empty",
                ResourceKind::District.element_name()
            ))
        );
        assert!(District::new_for_insert("Gampaha", "p1").validate().is_ok());
    }

    #[test]
    fn orphan_district_is_rejected() {
        let district = District::new_for_insert("Gampaha", "");
        assert_eq!(
            district.validate(),
            Err("District must belong to a province".to_string())
        );
    }
}
