//! Project card component.

use core_types::ProjectId;
use project_client::ProjectCard;
use yew::prelude::*;

/// Properties for ProjectItem component.
#[derive(Properties, PartialEq)]
pub struct ProjectItemProps {
    pub card: ProjectCard,
    pub on_edit: Callback<ProjectId>,
    pub on_delete: Callback<ProjectId>,
}

/// One project card. Every field is rendered as text.
#[function_component(ProjectItem)]
pub fn project_item(props: &ProjectItemProps) -> Html {
    let card = &props.card;
    let id = card.id;

    html! {
        <div class="project-card">
            <h3>{ &card.name }</h3>
            <p>{ &card.description }</p>
            <p>{ format!("Deadline: {}", card.deadline) }</p>
            <p>{ format!("Status: {}", card.status) }</p>
            <p>{ format!("Current Phase: {}", card.phase) }</p>
            <div class="project-actions">
                <button class="btn btn-secondary" onclick={props.on_edit.reform(move |_| id)}>
                    {"Edit"}
                </button>
                <button class="btn btn-secondary" onclick={props.on_delete.reform(move |_| id)}>
                    {"Delete"}
                </button>
            </div>
        </div>
    }
}
