//! Loading indicator.

use yew::prelude::*;

/// Properties for Loading component.
#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    /// Text shown under the spinner
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Spinner shown while the first fetch is in flight.
#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="loading" role="status">
            <div class="spinner"></div>
            if let Some(label) = &props.label {
                <span class="loading-label">{ label.clone() }</span>
            }
        </div>
    }
}
