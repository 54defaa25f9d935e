use serde::{Deserialize, Serialize};

/// Вид ресурса, доступного через списочные экраны.
///
/// Один вид = одна REST-коллекция `/{version}/{collection}` и один ключ таба.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Province,
    District,
    City,
    Role,
    Customer,
    ParkingOwner,
    ParkingArea,
    ParkingSlot,
    SubscriptionFee,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 9] = [
        ResourceKind::Province,
        ResourceKind::District,
        ResourceKind::City,
        ResourceKind::Role,
        ResourceKind::Customer,
        ResourceKind::ParkingOwner,
        ResourceKind::ParkingArea,
        ResourceKind::ParkingSlot,
        ResourceKind::SubscriptionFee,
    ];

    /// Tab key of the list screen (e.g. "a001_province")
    pub fn key(self) -> &'static str {
        match self {
            ResourceKind::Province => "a001_province",
            ResourceKind::District => "a002_district",
            ResourceKind::City => "a003_city",
            ResourceKind::Role => "a004_role",
            ResourceKind::Customer => "a005_customer",
            ResourceKind::ParkingOwner => "a006_parking_owner",
            ResourceKind::ParkingArea => "a007_parking_area",
            ResourceKind::ParkingSlot => "a008_parking_slot",
            ResourceKind::SubscriptionFee => "a009_subscription_fee",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.key() == key)
    }

    /// REST collection segment (`GET {base}/v1/{collection}`)
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Province => "province",
            ResourceKind::District => "district",
            ResourceKind::City => "city",
            ResourceKind::Role => "role",
            ResourceKind::Customer => "user",
            ResourceKind::ParkingOwner => "parking-owner",
            ResourceKind::ParkingArea => "parking-area",
            ResourceKind::ParkingSlot => "parking-slot",
            ResourceKind::SubscriptionFee => "parking-subscription-fee",
        }
    }

    /// Field of the list response that wraps the collection
    pub fn envelope_field(self) -> &'static str {
        match self {
            ResourceKind::Province => "provinces",
            ResourceKind::District => "districts",
            ResourceKind::City => "cities",
            ResourceKind::Role => "roles",
            ResourceKind::Customer => "users",
            ResourceKind::ParkingOwner => "parkingOwners",
            ResourceKind::ParkingArea => "parkingAreas",
            ResourceKind::ParkingSlot => "parkingSlots",
            ResourceKind::SubscriptionFee => "parkingSubscriptionFees",
        }
    }

    /// Singular UI name
    pub fn element_name(self) -> &'static str {
        match self {
            ResourceKind::Province => "Province",
            ResourceKind::District => "District",
            ResourceKind::City => "City",
            ResourceKind::Role => "Role",
            ResourceKind::Customer => "Customer",
            ResourceKind::ParkingOwner => "Parking owner",
            ResourceKind::ParkingArea => "Parking area",
            ResourceKind::ParkingSlot => "Parking slot",
            ResourceKind::SubscriptionFee => "Subscription fee",
        }
    }

    /// Plural UI name
    pub fn list_name(self) -> &'static str {
        match self {
            ResourceKind::Province => "Provinces",
            ResourceKind::District => "Districts",
            ResourceKind::City => "Cities",
            ResourceKind::Role => "Roles",
            ResourceKind::Customer => "Customers",
            ResourceKind::ParkingOwner => "Parking owners",
            ResourceKind::ParkingArea => "Parking areas",
            ResourceKind::ParkingSlot => "Parking slots",
            ResourceKind::SubscriptionFee => "Subscription fees",
        }
    }

    /// Owning kind for scoped resources
    pub fn parent(self) -> Option<ResourceKind> {
        match self {
            ResourceKind::District => Some(ResourceKind::Province),
            ResourceKind::City => Some(ResourceKind::District),
            ResourceKind::ParkingArea => Some(ResourceKind::City),
            ResourceKind::ParkingSlot => Some(ResourceKind::ParkingArea),
            _ => None,
        }
    }

    /// Child kind listed inside this kind's detail view
    pub fn child(self) -> Option<ResourceKind> {
        Self::ALL.into_iter().find(|kind| kind.parent() == Some(self))
    }

    /// Prefix of detail tab keys, e.g. "a001_province_detail_"
    pub fn detail_prefix(self) -> String {
        format!("{}_detail_", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(ResourceKind::from_key("a999_unknown"), None);
    }

    #[test]
    fn hierarchy_is_consistent() {
        assert_eq!(ResourceKind::Province.child(), Some(ResourceKind::District));
        assert_eq!(ResourceKind::District.child(), Some(ResourceKind::City));
        assert_eq!(ResourceKind::ParkingArea.child(), Some(ResourceKind::ParkingSlot));
        assert_eq!(ResourceKind::Role.child(), None);

        for kind in ResourceKind::ALL {
            if let Some(child) = kind.child() {
                assert_eq!(child.parent(), Some(kind));
            }
        }
    }

    #[test]
    fn customers_live_under_user_collection() {
        assert_eq!(ResourceKind::Customer.collection(), "user");
        assert_eq!(ResourceKind::Customer.envelope_field(), "users");
    }
}
