pub mod aggregate;

pub use aggregate::District;
