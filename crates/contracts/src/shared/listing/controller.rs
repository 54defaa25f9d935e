use super::state::ListState;
use crate::domain::common::{Editable, Listable};
use crate::shared::api_error::ApiError;
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::{json, Value};
use std::marker::PhantomData;

/// REST-коллекция одного вида ресурса
///
/// The HTTP client implements this in the browser; tests use an in-memory fake.
#[async_trait(?Send)]
pub trait ResourceApi<T> {
    async fn list(&self) -> Result<Vec<T>, ApiError>;
    async fn fetch(&self, id: &str) -> Result<T, ApiError>;
    async fn create(&self, item: &T) -> Result<(), ApiError>;
    /// Full replace (PUT)
    async fn replace(&self, id: &str, item: &T) -> Result<(), ApiError>;
    /// Partial update (PATCH)
    async fn patch(&self, id: &str, changes: Value) -> Result<(), ApiError>;
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
}

/// Владелец состояния списка
///
/// Both methods return `None` once the owning screen is gone; the
/// controller then drops whatever result it was about to apply.
pub trait ListStore<T> {
    fn read<R>(&self, f: impl FnOnce(&ListState<T>) -> R) -> Option<R>;
    fn write<R>(&self, f: impl FnOnce(&mut ListState<T>) -> R) -> Option<R>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Диалоги и уведомления
pub trait Interaction {
    /// Yes/no guard shown before every mutation
    fn confirm(&self, prompt: &str) -> bool;
    fn notify(&self, notice: Notice);
    /// Called on 401/403
    fn session_expired(&self);
}

/// Действие над строкой списка
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    ToggleActive,
    Delete,
    /// Parking owners only
    Approve,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// User said no at the confirmation prompt
    Cancelled,
    /// Row unknown, already busy, list loading or screen disposed
    Skipped,
    Applied,
    Failed(ApiError),
}

pub struct ListController<T, A, S, I> {
    api: A,
    store: S,
    ui: I,
    _marker: PhantomData<fn() -> T>,
}

impl<T, A, S, I> ListController<T, A, S, I>
where
    T: Listable,
    A: ResourceApi<T>,
    S: ListStore<T>,
    I: Interaction,
{
    pub fn new(api: A, store: S, ui: I) -> Self {
        Self {
            api,
            store,
            ui,
            _marker: PhantomData,
        }
    }

    /// Fetch the whole collection. Only the latest issued load is applied.
    pub async fn load(&self) {
        let Some(ticket) = self.store.write(|s| s.begin_load()) else {
            return;
        };
        debug!("loading {}", T::kind().collection());

        match self.api.list().await {
            Ok(items) => {
                let count = items.len();
                match self.store.write(|s| s.finish_load(ticket, Ok(items))) {
                    Some(true) => debug!("{} loaded: {} rows", T::kind().collection(), count),
                    Some(false) => warn!("discarded stale {} response", T::kind().collection()),
                    None => debug!("{} list disposed before load finished", T::kind().collection()),
                }
            }
            Err(err) => {
                warn!("failed to load {}: {}", T::kind().collection(), err);
                let message = err.user_message();
                if self.store.write(|s| s.finish_load(ticket, Err(message))) == Some(true) {
                    self.report(&err);
                }
            }
        }
    }

    /// Status filter change; refetches only when the value changed
    pub async fn set_status(&self, status_filter: bool) {
        if self.store.write(|s| s.set_status(status_filter)) == Some(true) {
            self.load().await;
        }
    }

    pub async fn toggle_active(&self, id: &str) -> MutationOutcome {
        self.run(id, RowAction::ToggleActive).await
    }

    pub async fn delete(&self, id: &str) -> MutationOutcome {
        self.run(id, RowAction::Delete).await
    }

    pub async fn approve(&self, id: &str) -> MutationOutcome {
        self.run(id, RowAction::Approve).await
    }

    /// confirm → busy row → request → notify → full refetch
    pub async fn run(&self, id: &str, action: RowAction) -> MutationOutcome {
        let Some(Some((label, active))) = self.store.read(|s| {
            s.items
                .iter()
                .find(|item| item.id() == id)
                .map(|item| (item.label().to_string(), item.is_active()))
        }) else {
            return MutationOutcome::Skipped;
        };

        if !self.ui.confirm(&prompt(T::kind().element_name(), &label, active, action)) {
            return MutationOutcome::Cancelled;
        }
        if self.store.write(|s| s.begin_mutation(id)) != Some(true) {
            return MutationOutcome::Skipped;
        }
        debug!("{:?} {} {}", action, T::kind().collection(), id);

        let result = match action {
            RowAction::ToggleActive => self.api.patch(id, json!({ "isActive": !active })).await,
            RowAction::Delete => self.api.delete(id).await,
            RowAction::Approve => {
                self.api
                    .patch(id, json!({ "approvalStatus": "approved" }))
                    .await
            }
        };

        match result {
            Ok(()) => {
                info!("{:?} {} {} done", action, T::kind().collection(), id);
                if self.store.write(|s| s.finish_mutation(id, None)).is_none() {
                    return MutationOutcome::Applied;
                }
                self.ui.notify(Notice::success(done_message(
                    T::kind().element_name(),
                    &label,
                    active,
                    action,
                )));
                self.load().await;
                MutationOutcome::Applied
            }
            Err(err) => {
                warn!("{:?} {} {} failed: {}", action, T::kind().collection(), id, err);
                let message = err.user_message();
                if self
                    .store
                    .write(|s| s.finish_mutation(id, Some(message)))
                    .is_some()
                {
                    self.report(&err);
                }
                MutationOutcome::Failed(err)
            }
        }
    }

    fn report(&self, err: &ApiError) {
        self.ui.notify(Notice::error(err.user_message()));
        if err.is_auth() {
            self.ui.session_expired();
        }
    }
}

impl<T, A, S, I> ListController<T, A, S, I>
where
    T: Editable,
    A: ResourceApi<T>,
    S: ListStore<T>,
    I: Interaction,
{
    /// Create (POST) or replace (PUT) from the edit form, then refetch
    pub async fn save(&self, item: &T) -> Result<(), ApiError> {
        if let Err(message) = item.validate() {
            return Err(ApiError::Validation {
                message,
                fields: Vec::new(),
            });
        }

        let is_new = item.id().is_empty();
        let result = if is_new {
            self.api.create(item).await
        } else {
            self.api.replace(item.id(), item).await
        };

        match result {
            Ok(()) => {
                let verb = if is_new { "created" } else { "updated" };
                info!("{} {} {}", T::kind().collection(), item.label(), verb);
                self.ui.notify(Notice::success(format!(
                    "{} \"{}\" {}",
                    T::kind().element_name(),
                    item.label(),
                    verb
                )));
                self.load().await;
                Ok(())
            }
            Err(err) => {
                warn!("saving {} failed: {}", T::kind().collection(), err);
                if err.is_auth() {
                    self.ui.session_expired();
                }
                Err(err)
            }
        }
    }
}

fn prompt(element: &str, label: &str, active: bool, action: RowAction) -> String {
    match action {
        RowAction::ToggleActive if active => format!("Deactivate {element} \"{label}\"?"),
        RowAction::ToggleActive => format!("Activate {element} \"{label}\"?"),
        RowAction::Delete => format!("Delete {element} \"{label}\"? This cannot be undone."),
        RowAction::Approve => format!("Approve {element} \"{label}\"?"),
    }
}

fn done_message(element: &str, label: &str, was_active: bool, action: RowAction) -> String {
    let what = match action {
        RowAction::ToggleActive if was_active => "deactivated",
        RowAction::ToggleActive => "activated",
        RowAction::Delete => "deleted",
        RowAction::Approve => "approved",
    };
    format!("{element} \"{label}\" {what}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a003_city::City;
    use crate::shared::listing::state::ListPhase;
    use std::cell::{Cell, RefCell};

    fn city(id: &str, name: &str, active: bool) -> City {
        City {
            id: id.into(),
            name: name.into(),
            district_id: "d1".into(),
            is_active: active,
            ..City::default()
        }
    }

    #[derive(Default)]
    struct FakeApi {
        rows: RefCell<Vec<City>>,
        fail_next: RefCell<Option<ApiError>>,
        calls: RefCell<Vec<String>>,
        /// Yields this many times before answering the first list call
        first_list_delay: Cell<usize>,
        list_calls: Cell<usize>,
    }

    impl FakeApi {
        fn with(rows: Vec<City>) -> Self {
            Self {
                rows: RefCell::new(rows),
                ..Self::default()
            }
        }

        fn take_failure(&self) -> Result<(), ApiError> {
            match self.fail_next.borrow_mut().take() {
                Some(err) => Err(err),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl<'a> ResourceApi<City> for &'a FakeApi {
        async fn list(&self) -> Result<Vec<City>, ApiError> {
            let call = self.list_calls.get();
            self.list_calls.set(call + 1);
            self.calls.borrow_mut().push("GET".into());
            let snapshot = self.rows.borrow().clone();
            if call == 0 {
                for _ in 0..self.first_list_delay.get() {
                    tokio::task::yield_now().await;
                }
            }
            self.take_failure()?;
            Ok(snapshot)
        }

        async fn fetch(&self, id: &str) -> Result<City, ApiError> {
            self.rows
                .borrow()
                .iter()
                .find(|c| c.id == id)
                .cloned()
                .ok_or(ApiError::Server {
                    status: 404,
                    message: None,
                })
        }

        async fn create(&self, item: &City) -> Result<(), ApiError> {
            self.calls.borrow_mut().push("POST".into());
            self.take_failure()?;
            let mut created = item.clone();
            created.id = format!("new{}", self.rows.borrow().len());
            self.rows.borrow_mut().push(created);
            Ok(())
        }

        async fn replace(&self, id: &str, item: &City) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("PUT {id}"));
            self.take_failure()?;
            for row in self.rows.borrow_mut().iter_mut() {
                if row.id == id {
                    *row = item.clone();
                }
            }
            Ok(())
        }

        async fn patch(&self, id: &str, changes: Value) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("PATCH {id} {changes}"));
            self.take_failure()?;
            for row in self.rows.borrow_mut().iter_mut() {
                if row.id == id {
                    if let Some(active) = changes.get("isActive").and_then(Value::as_bool) {
                        row.is_active = active;
                    }
                }
            }
            Ok(())
        }

        async fn delete(&self, id: &str) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("DELETE {id}"));
            self.take_failure()?;
            self.rows.borrow_mut().retain(|row| row.id != id);
            Ok(())
        }
    }

    #[derive(Default)]
    struct FakeStore {
        state: RefCell<ListState<City>>,
        disposed: Cell<bool>,
    }

    impl<'a> ListStore<City> for &'a FakeStore {
        fn read<R>(&self, f: impl FnOnce(&ListState<City>) -> R) -> Option<R> {
            (!self.disposed.get()).then(|| f(&self.state.borrow()))
        }

        fn write<R>(&self, f: impl FnOnce(&mut ListState<City>) -> R) -> Option<R> {
            (!self.disposed.get()).then(|| f(&mut self.state.borrow_mut()))
        }
    }

    struct FakeUi {
        answer: bool,
        prompts: RefCell<Vec<String>>,
        notices: RefCell<Vec<Notice>>,
        expired: Cell<bool>,
    }

    impl FakeUi {
        fn answering(answer: bool) -> Self {
            Self {
                answer,
                prompts: RefCell::default(),
                notices: RefCell::default(),
                expired: Cell::new(false),
            }
        }
    }

    impl<'a> Interaction for &'a FakeUi {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer
        }

        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn session_expired(&self) {
            self.expired.set(true);
        }
    }

    fn seed() -> Vec<City> {
        vec![
            city("1", "Colombo", true),
            city("2", "Kandy", true),
            city("3", "Galle", false),
        ]
    }

    #[tokio::test]
    async fn load_fills_state() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        let state = store.state.borrow();
        assert_eq!(state.phase, ListPhase::Ready);
        assert_eq!(state.items.len(), 3);
        assert_eq!(state.visible().items.len(), 2);
    }

    #[tokio::test]
    async fn load_failure_keeps_rows_and_notifies() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        *api.fail_next.borrow_mut() = Some(ApiError::Network("offline".into()));
        controller.load().await;

        let state = store.state.borrow();
        assert_eq!(state.phase, ListPhase::Error);
        assert_eq!(state.items.len(), 3);
        let notices = ui.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
    }

    #[tokio::test]
    async fn toggle_round_trip() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        assert_eq!(controller.toggle_active("1").await, MutationOutcome::Applied);
        assert!(!store.state.borrow().items[0].is_active);
        assert_eq!(ui.prompts.borrow()[0], "Deactivate City \"Colombo\"?");
        assert!(api
            .calls
            .borrow()
            .contains(&r#"PATCH 1 {"isActive":false}"#.to_string()));

        assert_eq!(controller.toggle_active("1").await, MutationOutcome::Applied);
        assert!(store.state.borrow().items[0].is_active);
        assert_eq!(store.state.borrow().phase, ListPhase::Ready);
    }

    #[tokio::test]
    async fn declined_confirmation_sends_nothing() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(false));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        assert_eq!(controller.delete("2").await, MutationOutcome::Cancelled);
        assert_eq!(*api.calls.borrow(), vec!["GET".to_string()]);
        assert_eq!(store.state.borrow().items.len(), 3);
    }

    #[tokio::test]
    async fn failed_toggle_leaves_row_unchanged() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        *api.fail_next.borrow_mut() = Some(ApiError::Server {
            status: 500,
            message: None,
        });
        let outcome = controller.toggle_active("2").await;
        assert!(matches!(outcome, MutationOutcome::Failed(_)));

        let state = store.state.borrow();
        assert!(state.items[1].is_active);
        assert_eq!(state.phase, ListPhase::Error);
        assert!(state.row_actions_enabled("2"));
        assert_eq!(
            ui.notices.borrow()[0].message,
            crate::shared::api_error::GENERIC_FAILURE_MESSAGE
        );
    }

    #[tokio::test]
    async fn conflict_on_delete_is_shown_verbatim() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        *api.fail_next.borrow_mut() = Some(ApiError::Conflict(
            "City still has parking areas".into(),
        ));
        controller.delete("1").await;

        assert_eq!(ui.notices.borrow()[0].message, "City still has parking areas");
        assert_eq!(store.state.borrow().items.len(), 3);
    }

    #[tokio::test]
    async fn delete_refetches() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        assert_eq!(controller.delete("2").await, MutationOutcome::Applied);
        assert_eq!(store.state.borrow().items.len(), 2);
        assert_eq!(
            *api.calls.borrow(),
            vec!["GET".to_string(), "DELETE 2".to_string(), "GET".to_string()]
        );
        assert_eq!(ui.notices.borrow()[0], Notice::success("City \"Kandy\" deleted"));
    }

    #[tokio::test]
    async fn auth_error_expires_session() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        *api.fail_next.borrow_mut() = Some(ApiError::Auth(401));
        controller.load().await;
        assert!(ui.expired.get());
    }

    #[tokio::test]
    async fn latest_load_wins() {
        let api = FakeApi::with(seed());
        api.first_list_delay.set(3);
        let (store, ui) = (FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);

        // first call snapshots three rows, then stalls; second sees one row
        let slow = controller.load();
        let fast = async {
            api.rows.borrow_mut().truncate(1);
            controller.load().await;
        };
        tokio::join!(slow, fast);

        assert_eq!(store.state.borrow().items.len(), 1);
    }

    #[tokio::test]
    async fn disposed_store_is_left_alone() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;
        store.disposed.set(true);

        assert_eq!(controller.toggle_active("1").await, MutationOutcome::Skipped);
        controller.load().await;
        assert_eq!(api.list_calls.get(), 1);
    }

    #[tokio::test]
    async fn status_change_refetches_once() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);
        controller.load().await;

        controller.set_status(false).await;
        controller.set_status(false).await;
        assert_eq!(api.list_calls.get(), 2);
        let visible = store.state.borrow().visible().items;
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Galle");
    }

    #[tokio::test]
    async fn blank_name_never_reaches_the_server() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);

        let err = controller.save(&City::blank(Some("d1"))).await.unwrap_err();
        assert!(matches!(err, ApiError::Validation { .. }));
        assert!(api.calls.borrow().is_empty());
    }

    #[tokio::test]
    async fn save_posts_new_and_puts_existing() {
        let (api, store, ui) = (FakeApi::with(seed()), FakeStore::default(), FakeUi::answering(true));
        let controller = ListController::new(&api, &store, &ui);

        let mut fresh = City::blank(Some("d1"));
        fresh.set_label("Jaffna".into());
        controller.save(&fresh).await.unwrap();

        let mut renamed = city("3", "Galle Fort", false);
        renamed.postal_code = Some("80000".into());
        controller.save(&renamed).await.unwrap();

        let calls = api.calls.borrow();
        assert_eq!(calls[0], "POST");
        assert!(calls.contains(&"PUT 3".to_string()));
        assert_eq!(store.state.borrow().items.len(), 4);
    }
}
