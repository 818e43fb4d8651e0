//! Reusable UI components.

mod loading;
mod login_form;
mod project_form;
mod project_item;
mod project_list;
mod status_message;

pub use loading::Loading;
pub use login_form::LoginForm;
pub use project_form::NewProjectForm;
pub use project_item::ProjectItem;
pub use project_list::ProjectList;
pub use status_message::StatusMessage;

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

/// Current value of the input that fired the event.
fn input_value(e: InputEvent) -> String {
    let input: HtmlInputElement = e.target_unchecked_into();
    input.value()
}

/// Current value of the textarea that fired the event.
fn textarea_value(e: InputEvent) -> String {
    let input: HtmlTextAreaElement = e.target_unchecked_into();
    input.value()
}
