//! The shared status element.

use project_client::Notification;
use yew::prelude::*;

/// Properties for StatusMessage component.
#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub notice: Option<Notification>,
}

/// Shows the latest notification in red (error) or green (success).
#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    match &props.notice {
        Some(notice) => html! {
            <div
                id="errorMessage"
                class="status-message"
                style={format!("color: {}; display: block;", notice.color())}
            >
                { &notice.message }
            </div>
        },
        None => html! {
            <div id="errorMessage" class="status-message" style="display: none;"></div>
        },
    }
}
