use leptos::prelude::*;

/// Состояние сессии
///
/// The admin API authenticates by cookie. Any 401/403 flips `expired`
/// and the shell is replaced by the sign-in prompt.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub expired: RwSignal<bool>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            expired: RwSignal::new(false),
        }
    }

    pub fn expire(&self) {
        if self.expired.try_get_untracked() == Some(false) {
            log::warn!("session expired, showing sign-in prompt");
            self.expired.set(true);
        }
    }

    /// After the user signed in again in another window
    pub fn resume(&self) {
        self.expired.set(false);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| {
        log::warn!("SessionContext not provided, using a detached one");
        SessionContext::new()
    })
}
