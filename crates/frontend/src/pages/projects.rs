//! Project list page: initial fetch, creation form, card actions.

use std::rc::Rc;

use core_types::{Project, ProjectId};
use project_client::{LoggingActions, ProjectsController};
use wasm_bindgen_futures::spawn_local;
use web_types::ProjectForm;
use yew::prelude::*;

use crate::components::{Loading, NewProjectForm, ProjectList};
use crate::config::client_config;
use crate::http::GlooTransport;
use crate::storage::LocalTokenStore;
use crate::view::{FormGeneration, NoticeHandle, PageView};

type PageController = ProjectsController<GlooTransport, LocalTokenStore, PageView, LoggingActions>;

/// Properties for ProjectsPage.
#[derive(Properties, PartialEq)]
pub struct ProjectsPageProps {
    pub notice: NoticeHandle,
}

/// Projects page component.
#[function_component(ProjectsPage)]
pub fn projects_page(props: &ProjectsPageProps) -> Html {
    let projects = use_state(|| Rc::new(Vec::<Project>::new()));
    let loading = use_state(|| true);
    let form_generation = use_reducer(FormGeneration::default);

    let controller: Rc<PageController> = Rc::new(ProjectsController::new(
        client_config(),
        GlooTransport,
        LocalTokenStore,
        PageView::new(
            projects.clone(),
            props.notice.clone(),
            form_generation.dispatcher(),
        ),
        LoggingActions,
    ));

    // Fetch once on load
    {
        let controller = controller.clone();
        let loading = loading.clone();

        use_effect_with((), move |_| {
            spawn_local(async move {
                controller.on_load().await;
                loading.set(false);
            });
        });
    }

    let on_submit = {
        let controller = controller.clone();
        Callback::from(move |form: ProjectForm| {
            let controller = controller.clone();
            spawn_local(async move {
                // Outcome is already on the status element.
                let _ = controller.submit_project(&form).await;
            });
        })
    };

    let on_edit = {
        let controller = controller.clone();
        Callback::from(move |id: ProjectId| controller.on_edit(id))
    };
    let on_delete = {
        let controller = controller.clone();
        Callback::from(move |id: ProjectId| controller.on_delete(id))
    };

    html! {
        <div>
            <h1>{"Projects"}</h1>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"New Project"}</h2>
                </div>
                <NewProjectForm key={form_generation.key()} {on_submit} />
            </div>

            if *loading {
                <Loading label={"Loading projects..."} />
            } else {
                <ProjectList projects={(*projects).clone()} {on_edit} {on_delete} />
            }
        </div>
    }
}
