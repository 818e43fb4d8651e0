//! Project list component.

use std::rc::Rc;

use chrono::Local;
use core_types::{Project, ProjectId};
use project_client::project_cards;
use yew::prelude::*;

use super::ProjectItem;

/// Properties for ProjectList component.
#[derive(Properties, PartialEq)]
pub struct ProjectListProps {
    pub projects: Rc<Vec<Project>>,
    pub on_edit: Callback<ProjectId>,
    pub on_delete: Callback<ProjectId>,
}

/// Renders one card per project, deadlines in the viewer's local time.
#[function_component(ProjectList)]
pub fn project_list(props: &ProjectListProps) -> Html {
    let cards = project_cards(&props.projects, &Local);

    html! {
        <div id="projects" class="project-list">
            if cards.is_empty() {
                <div class="card">
                    <p>{"No projects yet."}</p>
                </div>
            } else {
                { for cards.into_iter().map(|card| {
                    let key = card.key.clone();
                    html! {
                        <ProjectItem
                            key={key}
                            {card}
                            on_edit={props.on_edit.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    }
                })}
            }
        </div>
    }
}
