//! Связка контроллера списка с реактивной средой Leptos

use crate::shared::http_api::HttpResourceApi;
use crate::shared::notifications::{use_notifications, NotificationService};
use crate::system::session::{use_session, SessionContext};
use contracts::domain::common::Listable;
use contracts::shared::listing::{Interaction, ListController, ListState, ListStore, Notice};
use leptos::prelude::*;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Запись, которую можно показать общим списком в браузере
pub trait Resource: Listable + Serialize + DeserializeOwned + Send + Sync + 'static {}

impl<T> Resource for T where T: Listable + Serialize + DeserializeOwned + Send + Sync + 'static {}

/// Состояние списка в сигнале
///
/// Once the owning screen is disposed every read/write returns `None`,
/// which makes in-flight responses a no-op.
pub struct SignalStore<T: Send + Sync + 'static>(pub RwSignal<ListState<T>>);

impl<T: Send + Sync + 'static> SignalStore<T> {
    pub fn new(state: ListState<T>) -> Self {
        Self(RwSignal::new(state))
    }
}

impl<T: Send + Sync + 'static> Clone for SignalStore<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for SignalStore<T> {}

impl<T: Send + Sync + 'static> ListStore<T> for SignalStore<T> {
    fn read<R>(&self, f: impl FnOnce(&ListState<T>) -> R) -> Option<R> {
        self.0.try_with_untracked(f)
    }

    fn write<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R> {
        self.0.try_update(f)
    }
}

/// confirm() окна браузера + тосты + флаг сессии
#[derive(Clone, Copy)]
pub struct UiInteraction {
    pub notices: NotificationService,
    pub session: SessionContext,
}

impl UiInteraction {
    /// Must run inside a component (reads context)
    pub fn from_context() -> Self {
        Self {
            notices: use_notifications(),
            session: use_session(),
        }
    }
}

impl Interaction for UiInteraction {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }

    fn notify(&self, notice: Notice) {
        self.notices.push(notice);
    }

    fn session_expired(&self) {
        self.session.expire();
    }
}

pub type Controller<T> = ListController<T, HttpResourceApi<T>, SignalStore<T>, UiInteraction>;

/// Controllers are cheap; build one per user action
pub fn controller<T: Resource>(
    store: SignalStore<T>,
    ui: UiInteraction,
) -> Controller<T> {
    ListController::new(HttpResourceApi::new(), store, ui)
}
