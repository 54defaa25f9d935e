pub mod aggregate;

pub use aggregate::ParkingArea;
