//! Login form.

use web_types::Credentials;
use yew::prelude::*;

use super::input_value;

/// Properties for LoginForm component.
#[derive(Properties, PartialEq)]
pub struct LoginFormProps {
    pub on_submit: Callback<Credentials>,
}

/// Username and password form.
#[function_component(LoginForm)]
pub fn login_form(props: &LoginFormProps) -> Html {
    let username = use_state(String::new);
    let password = use_state(String::new);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let on_submit = props.on_submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(Credentials::new((*username).clone(), (*password).clone()));
        })
    };

    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| username.set(input_value(e)))
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| password.set(input_value(e)))
    };

    html! {
        <form class="login-form" {onsubmit}>
            <label for="username">{"Username"}</label>
            <input
                id="username"
                name="username"
                type="text"
                autocomplete="username"
                required=true
                value={(*username).clone()}
                oninput={on_username}
            />

            <label for="password">{"Password"}</label>
            <input
                id="password"
                name="password"
                type="password"
                autocomplete="current-password"
                required=true
                value={(*password).clone()}
                oninput={on_password}
            />

            <button type="submit" class="btn btn-primary">{"Log in"}</button>
        </form>
    }
}
