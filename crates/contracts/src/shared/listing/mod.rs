//! Фильтруемый постраничный список ресурсов

pub mod controller;
pub mod filter;
pub mod pagination;
pub mod state;

pub use controller::{
    Interaction, ListController, ListStore, MutationOutcome, Notice, NoticeLevel, ResourceApi,
    RowAction,
};
pub use filter::{apply_filters, ListFilter};
pub use pagination::{clamp_page, paginate, total_pages, Page, PAGE_SIZE};
pub use state::{FilterState, ListPhase, ListState, LoadTicket};
