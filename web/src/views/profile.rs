//! Profile view: the signed-in user's identity and role.

use api::UserProfile;
use dioxus::prelude::*;
use ui::use_session;

use crate::views::api_client;

#[component]
pub fn Profile() -> Element {
    let session = use_session();
    let mut profile = use_signal(|| Option::<UserProfile>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let token = session.peek().token.clone();
        match api_client().profile(token.as_deref()).await {
            Ok(data) => profile.set(Some(data)),
            Err(e) => {
                tracing::error!("fetching profile: {e}");
                error.set(Some(
                    e.server_message()
                        .unwrap_or("An error occurred while fetching the profile")
                        .to_string(),
                ));
            }
        }
    });

    rsx! {
        div {
            class: "page",
            h2 { "Profile" }
            if let Some(data) = profile() {
                p { strong { "Username: " } "{data.username}" }
                p { strong { "Role: " } "{data.role}" }
            } else if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            } else {
                div { "Loading..." }
            }
        }
    }
}
