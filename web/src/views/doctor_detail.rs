//! Doctor detail: read-only card for a single doctor.

use api::Doctor;
use dioxus::prelude::*;
use ui::{alert, use_session};

use crate::views::api_client;

#[component]
pub fn DoctorDetail(id: i64) -> Element {
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let session = use_session();
    let mut doctor = use_signal(|| Option::<Doctor>::None);
    let mut error = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || {
        let doctor_id = id_signal();
        async move {
            doctor.set(None);
            error.set(None);
            let token = session.peek().token.clone();
            match api_client().doctor(token.as_deref(), doctor_id).await {
                Ok(record) => doctor.set(Some(record)),
                Err(e) => {
                    tracing::error!("fetching doctor {doctor_id}: {e}");
                    let message = e
                        .server_message()
                        .unwrap_or("An error occurred while fetching the doctor details")
                        .to_string();
                    alert(&message);
                    error.set(Some(message));
                }
            }
        }
    });

    rsx! {
        div {
            class: "page",
            h2 { "Doctor Details" }
            if let Some(record) = doctor() {
                div {
                    class: "card",
                    h3 { "{record.name}" }
                    p { strong { "Specialization: " } "{record.specialization}" }
                    p { strong { "Phone Number: " } "{record.phone}" }
                }
            } else if let Some(err) = error() {
                div { class: "form-error", "{err}" }
            } else {
                div { "Loading..." }
            }
        }
    }
}
