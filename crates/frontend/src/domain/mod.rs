pub mod a001_province;
pub mod a002_district;
pub mod a003_city;
pub mod a004_role;
pub mod a005_customer;
pub mod a006_parking_owner;
pub mod a007_parking_area;
pub mod a008_parking_slot;
pub mod a009_subscription_fee;
