//! New project form.

use web_types::{FIELD_DEADLINE, FIELD_DESCRIPTION, FIELD_NAME, ProjectForm};
use yew::prelude::*;

use super::{input_value, textarea_value};

/// Properties for NewProjectForm component.
#[derive(Properties, PartialEq)]
pub struct NewProjectFormProps {
    pub on_submit: Callback<ProjectForm>,
}

/// Collects the form fields into a [`ProjectForm`] on submit.
///
/// The form keeps no state across resets: the page remounts it.
#[function_component(NewProjectForm)]
pub fn new_project_form(props: &NewProjectFormProps) -> Html {
    let name = use_state(String::new);
    let description = use_state(String::new);
    let deadline = use_state(String::new);

    let onsubmit = {
        let name = name.clone();
        let description = description.clone();
        let deadline = deadline.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let form = ProjectForm::new()
                .with(FIELD_NAME, (*name).clone())
                .with(FIELD_DESCRIPTION, (*description).clone())
                .with(FIELD_DEADLINE, (*deadline).clone());
            on_submit.emit(form);
        })
    };

    let on_name = {
        let name = name.clone();
        Callback::from(move |e: InputEvent| name.set(input_value(e)))
    };
    let on_description = {
        let description = description.clone();
        Callback::from(move |e: InputEvent| description.set(textarea_value(e)))
    };
    let on_deadline = {
        let deadline = deadline.clone();
        Callback::from(move |e: InputEvent| deadline.set(input_value(e)))
    };

    html! {
        <form id="newProjectForm" class="project-form" {onsubmit}>
            <label for="name">{"Name"}</label>
            <input
                id="name"
                name={FIELD_NAME}
                type="text"
                required=true
                minlength="3"
                maxlength="50"
                value={(*name).clone()}
                oninput={on_name}
            />

            <label for="description">{"Description"}</label>
            <textarea
                id="description"
                name={FIELD_DESCRIPTION}
                required=true
                minlength="10"
                maxlength="500"
                value={(*description).clone()}
                oninput={on_description}
            />

            <label for="deadline">{"Deadline"}</label>
            <input
                id="deadline"
                name={FIELD_DEADLINE}
                type="datetime-local"
                required=true
                value={(*deadline).clone()}
                oninput={on_deadline}
            />

            <button type="submit" class="btn btn-primary">{"Create Project"}</button>
        </form>
    }
}
