//! Login page.

use std::rc::Rc;

use project_client::{LoggingActions, Notification, Notifier, ProjectsController};
use wasm_bindgen_futures::spawn_local;
use web_types::Credentials;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::components::LoginForm;
use crate::config::client_config;
use crate::http::GlooTransport;
use crate::storage::LocalTokenStore;
use crate::view::{NoticeHandle, NoticeView};

/// Shown after the token is stored.
const LOGGED_IN: &str = "Logged in successfully";

/// Properties for LoginPage.
#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub notice: NoticeHandle,
}

/// Login page component.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let navigator = use_navigator();

    let controller = Rc::new(ProjectsController::new(
        client_config(),
        GlooTransport,
        LocalTokenStore,
        NoticeView::new(props.notice.clone()),
        LoggingActions,
    ));

    let on_submit = Callback::from(move |credentials: Credentials| {
        let controller = controller.clone();
        let navigator = navigator.clone();
        spawn_local(async move {
            if controller.login(&credentials).await.is_ok() {
                controller.view().notify(Notification::success(LOGGED_IN));
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Projects);
                }
            }
        });
    });

    html! {
        <div class="card">
            <div class="card-header">
                <h1 class="card-title">{"Log in"}</h1>
            </div>
            <LoginForm {on_submit} />
        </div>
    }
}
