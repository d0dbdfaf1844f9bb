//! Login view: collects credentials, stores the issued bearer token.

use dioxus::prelude::*;
use ui::{store_token, use_session};

use crate::views::api_client;
use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut busy = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            let user = username().trim().to_string();
            let pass = password();

            if user.is_empty() {
                error.set(Some("Please enter your username".to_string()));
                return;
            }
            if pass.is_empty() {
                error.set(Some("Please enter your password".to_string()));
                return;
            }

            busy.set(true);
            match api_client().login(&user, &pass).await {
                Ok(response) => {
                    store_token(session, response.token);
                    nav.replace(Route::Profile {});
                }
                Err(e) => {
                    tracing::error!("login failed: {e}");
                    busy.set(false);
                    // Entered values stay in place for a retry.
                    error.set(Some(
                        e.server_message().unwrap_or("Login failed").to_string(),
                    ));
                }
            }
        });
    };

    rsx! {
        div {
            class: "login-page",
            h1 { class: "login-title", "ClinicDesk" }
            p { class: "login-subtitle", "Sign in to manage clinics and doctors" }

            form {
                class: "login-form",
                onsubmit: handle_submit,

                if let Some(err) = error() {
                    div { class: "form-error", "{err}" }
                }

                input {
                    class: "form-input",
                    r#type: "text",
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt| username.set(evt.value()),
                }

                input {
                    class: "form-input",
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt| password.set(evt.value()),
                }

                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
