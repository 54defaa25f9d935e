use crate::domain::common::{Editable, Listable, ResourceKind, Timestamps};
use serde::{Deserialize, Serialize};

/// Парковочное место внутри площадки
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParkingSlot {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Slot number as painted on the ground, e.g. "B-12"
    #[serde(rename = "slotNumber")]
    pub slot_number: String,
    #[serde(rename = "parkingAreaId")]
    pub parking_area_id: String,
    #[serde(rename = "vehicleType", default)]
    pub vehicle_type: String,
    #[serde(rename = "isActive", default)]
    pub is_active: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Listable for ParkingSlot {
    fn kind() -> ResourceKind {
        ResourceKind::ParkingSlot
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.slot_number
    }

    fn is_active(&self) -> bool {
        self.is_active
    }

    fn parent_id(&self) -> Option<&str> {
        Some(&self.parking_area_id)
    }
}

impl Editable for ParkingSlot {
    fn blank(parent_id: Option<&str>) -> Self {
        Self {
            parking_area_id: parent_id.unwrap_or_default().to_string(),
            vehicle_type: "car".to_string(),
            is_active: true,
            ..Self::default()
        }
    }

    fn set_label(&mut self, label: String) {
        self.slot_number = label;
    }

    fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    fn validate(&self) -> Result<(), String> {
        if self.slot_number.trim().is_empty() {
            return Err("Slot number must not be empty".into());
        }
        if self.parking_area_id.trim().is_empty() {
            return Err("Slot must belong to a parking area".into());
        }
        Ok(())
    }
}
