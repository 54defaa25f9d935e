pub mod aggregate;

pub use aggregate::ParkingSlot;
