use crate::shared::config::config;
use crate::system::session::use_session;
use leptos::prelude::*;
use thaw::*;

/// Сессия истекла: ссылка на вход и повтор
#[component]
pub fn SessionExpiredPage() -> impl IntoView {
    let session = use_session();
    let login_url = config().session.login_url.clone();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"FindMySpot Admin"</h1>
                <h2>"Session expired"</h2>
                <p>"Your session has expired or you are not allowed to perform this action. Sign in again to continue."</p>
                <Flex gap=FlexGap::Small justify=FlexJustify::Center>
                    <a class="login-link" href=login_url>"Sign in"</a>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| session.resume()
                    >
                        "I signed in again"
                    </Button>
                </Flex>
            </div>
        </div>
    }
}
