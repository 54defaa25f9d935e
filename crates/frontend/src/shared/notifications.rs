use crate::shared::config::config;
use crate::shared::icons::icon;
use contracts::shared::listing::{Notice, NoticeLevel};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;

#[derive(Debug, Clone, PartialEq)]
pub struct NoticeItem {
    pub id: Uuid,
    pub level: NoticeLevel,
    pub message: String,
}

/// Append `item`, keeping only the newest `max_visible`
fn push_bounded(queue: &mut Vec<NoticeItem>, item: NoticeItem, max_visible: usize) {
    queue.push(item);
    let overflow = queue.len().saturating_sub(max_visible.max(1));
    if overflow > 0 {
        queue.drain(..overflow);
    }
}

/// Очередь всплывающих уведомлений
///
/// Each notice dismisses itself after `notifications.ttl_ms`.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<Vec<NoticeItem>>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(Vec::new()),
        }
    }

    pub fn push(&self, notice: Notice) {
        let settings = &config().notifications;
        let id = Uuid::new_v4();
        match notice.level {
            NoticeLevel::Error => log::warn!("notice: {}", notice.message),
            _ => log::info!("notice: {}", notice.message),
        }
        let item = NoticeItem {
            id,
            level: notice.level,
            message: notice.message,
        };
        let max_visible = settings.max_visible;
        self.queue.update(|q| push_bounded(q, item, max_visible));

        let svc = *self;
        let ttl_ms = settings.ttl_ms;
        spawn_local(async move {
            TimeoutFuture::new(ttl_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    pub fn dismiss(&self, id: Uuid) {
        // queue may already be disposed if the app unmounted
        let _ = self.queue.try_update(|q| q.retain(|n| n.id != id));
    }

    pub fn items(&self) -> Vec<NoticeItem> {
        self.queue.get()
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().unwrap_or_else(|| {
        log::warn!("NotificationService not provided, using a detached one");
        NotificationService::new()
    })
}

fn level_class(level: NoticeLevel) -> &'static str {
    match level {
        NoticeLevel::Success => "notice notice--success",
        NoticeLevel::Error => "notice notice--error",
    }
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="notice-host" role="status" aria-live="polite">
            <For
                each=move || svc.items()
                key=|n| n.id
                children=move |n: NoticeItem| {
                    let id = n.id;
                    view! {
                        <div class=level_class(n.level)>
                            <span class="notice__message">{n.message}</span>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(message: &str) -> NoticeItem {
        NoticeItem {
            id: Uuid::new_v4(),
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    #[test]
    fn keeps_only_newest_notices() {
        let mut queue = Vec::new();
        for m in ["a", "b", "c", "d"] {
            push_bounded(&mut queue, item(m), 3);
        }
        let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(messages, vec!["b", "c", "d"]);
    }

    #[test]
    fn zero_limit_still_shows_latest() {
        let mut queue = Vec::new();
        push_bounded(&mut queue, item("a"), 0);
        push_bounded(&mut queue, item("b"), 0);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue[0].message, "b");
    }
}
