//! Табы рабочей области: содержимое, реестр маршрутов, заголовки

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_label, tab_label_for_key, tab_label_for_route};
