pub mod aggregate;

pub use aggregate::SubscriptionFee;
