//! Common types and traits for all listable resources

pub mod envelope;
pub mod listable;
pub mod resource_kind;
pub mod timestamps;

// Re-exports
pub use envelope::{decode_list, decode_one};
pub use listable::{Editable, Listable};
pub use resource_kind::ResourceKind;
pub use timestamps::Timestamps;
