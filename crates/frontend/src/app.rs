//! Main application component with routing.

use project_client::Notification;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::StatusMessage;
use crate::pages::{LoginPage, ProjectsPage};
use crate::view::NoticeHandle;

/// Application routes.
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Projects,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route switch function.
fn switch(route: Route, notice: NoticeHandle) -> Html {
    match route {
        Route::Projects => html! { <ProjectsPage {notice} /> },
        Route::Login => html! { <LoginPage {notice} /> },
        Route::NotFound => html! {
            <div class="card">
                <h1>{"404 - Page Not Found"}</h1>
                <p>{"The page you're looking for doesn't exist."}</p>
            </div>
        },
    }
}

/// Main application component.
///
/// Owns the single status element shared by every page.
#[function_component(App)]
pub fn app() -> Html {
    let notice = use_state(|| None::<Notification>);

    let render = {
        let notice = notice.clone();
        Callback::from(move |route: Route| switch(route, notice.clone()))
    };

    html! {
        <BrowserRouter>
            <div class="app-container">
                <Sidebar />
                <main class="main-content">
                    <StatusMessage notice={(*notice).clone()} />
                    <Switch<Route> {render} />
                </main>
            </div>
        </BrowserRouter>
    }
}

/// Sidebar navigation component.
#[function_component(Sidebar)]
fn sidebar() -> Html {
    html! {
        <aside class="sidebar">
            <Link<Route> to={Route::Projects} classes="nav-brand">
                {"Project Board"}
            </Link<Route>>
            <nav>
                <ul class="nav-links">
                    <li>
                        <Link<Route> to={Route::Projects}>
                            {"Projects"}
                        </Link<Route>>
                    </li>
                    <li>
                        <Link<Route> to={Route::Login}>
                            {"Login"}
                        </Link<Route>>
                    </li>
                </ul>
            </nav>
        </aside>
    }
}
