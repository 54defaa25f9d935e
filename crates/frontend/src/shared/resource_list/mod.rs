//! Общий списочный экран ресурса
//!
//! `store` glues the list controller to Leptos signals, `list` renders the
//! table, `form` adds the create/edit modal on top of it.

pub mod form;
pub mod list;
pub mod store;

pub use form::{EditableList, ResourceForm};
pub use list::{Column, ResourceList, RowExtra};
pub use store::{controller, Controller, Resource, SignalStore, UiInteraction};
