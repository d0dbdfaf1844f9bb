//! Clinic management: the full CRUD surface over `/clinics`.
//!
//! The list mirrors the last server response. Every mutation is a full round
//! trip; the local list is only touched in the success arm, so a failed call
//! leaves it exactly as it was and the form keeps its values.

use api::{lists, Clinic, ClinicDraft};
use dioxus::prelude::*;
use ui::{alert, use_session, Modal};

use crate::views::api_client;
use crate::Route;

#[component]
pub fn Clinics() -> Element {
    let session = use_session();
    let mut clinics = use_signal(Vec::<Clinic>::new);
    let mut draft = use_signal(ClinicDraft::default);
    let mut edit = use_signal(|| Option::<Clinic>::None);
    let mut show_add = use_signal(|| false);
    let mut notice = use_signal(|| Option::<String>::None);

    let _loader = use_resource(move || async move {
        let token = session.peek().token.clone();
        match api_client().clinics(token.as_deref()).await {
            Ok(list) => clinics.set(list),
            Err(e) => {
                tracing::error!("fetching clinics: {e}");
                alert(
                    e.server_message()
                        .unwrap_or("An error occurred while fetching the clinics"),
                );
            }
        }
    });

    let handle_add = move |_| {
        spawn(async move {
            let token = session.peek().token.clone();
            match api_client().create_clinic(token.as_deref(), &draft()).await {
                Ok(created) => {
                    clinics.write().push(created);
                    draft.set(ClinicDraft::default());
                    show_add.set(false);
                    notice.set(Some("Clinic added successfully!".to_string()));
                }
                Err(e) => {
                    tracing::error!("adding clinic: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while adding the clinic"),
                    );
                }
            }
        });
    };

    let handle_update = move |_| {
        spawn(async move {
            let Some(pending) = edit() else { return };
            let token = session.peek().token.clone();
            match api_client().update_clinic(token.as_deref(), &pending).await {
                Ok(updated) => {
                    lists::replace_by_id(&mut clinics.write(), updated);
                    edit.set(None);
                    notice.set(Some("Clinic updated successfully!".to_string()));
                }
                Err(e) => {
                    tracing::error!("updating clinic: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while updating the clinic"),
                    );
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            let token = session.peek().token.clone();
            match api_client().delete_clinic(token.as_deref(), id).await {
                Ok(()) => {
                    lists::remove_by_id(&mut clinics.write(), id);
                    notice.set(Some("Clinic deleted successfully!".to_string()));
                }
                Err(e) => {
                    tracing::error!("deleting clinic: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while deleting the clinic"),
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "Clinic Management" }

            button {
                class: "btn btn-primary",
                onclick: move |_| show_add.set(true),
                "Add New Clinic"
            }

            h2 { "Clinic List" }
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Address" }
                        th { "Phone Number" }
                        th { "Open Time" }
                        th { "Close Time" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for clinic in clinics() {
                        tr {
                            key: "{clinic.id}",
                            td { "{clinic.name}" }
                            td { "{clinic.address}" }
                            td { "{clinic.phone_number}" }
                            td { "{clinic.open_time}" }
                            td { "{clinic.close_time}" }
                            td {
                                button {
                                    class: "btn btn-warning btn-sm",
                                    onclick: {
                                        let clinic = clinic.clone();
                                        move |_| edit.set(Some(clinic.clone()))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger btn-sm",
                                    onclick: move |_| handle_delete(clinic.id),
                                    "Delete"
                                }
                                Link {
                                    class: "btn btn-info btn-sm",
                                    to: Route::ClinicDetail { id: clinic.id },
                                    "View"
                                }
                            }
                        }
                    }
                }
            }

            if show_add() {
                Modal {
                    title: "Add New Clinic",
                    on_close: move |_| show_add.set(false),
                    div {
                        class: "form-field",
                        label { "Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{draft().name}",
                            oninput: move |evt| draft.write().name = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Address" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{draft().address}",
                            oninput: move |evt| draft.write().address = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Phone Number" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{draft().phone_number}",
                            oninput: move |evt| draft.write().phone_number = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Open Time" }
                        input {
                            class: "form-input",
                            r#type: "time",
                            value: "{draft().open_time}",
                            oninput: move |evt| draft.write().open_time = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Close Time" }
                        input {
                            class: "form-input",
                            r#type: "time",
                            value: "{draft().close_time}",
                            oninput: move |evt| draft.write().close_time = evt.value(),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_add,
                        "Add Clinic"
                    }
                }
            }

            if let Some(pending) = edit() {
                Modal {
                    title: "Edit Clinic",
                    on_close: move |_| edit.set(None),
                    div {
                        class: "form-field",
                        label { "Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{pending.name}",
                            oninput: move |evt| {
                                if let Some(clinic) = edit.write().as_mut() {
                                    clinic.name = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Address" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{pending.address}",
                            oninput: move |evt| {
                                if let Some(clinic) = edit.write().as_mut() {
                                    clinic.address = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Phone Number" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{pending.phone_number}",
                            oninput: move |evt| {
                                if let Some(clinic) = edit.write().as_mut() {
                                    clinic.phone_number = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Open Time" }
                        input {
                            class: "form-input",
                            r#type: "time",
                            value: "{pending.open_time}",
                            oninput: move |evt| {
                                if let Some(clinic) = edit.write().as_mut() {
                                    clinic.open_time = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Close Time" }
                        input {
                            class: "form-input",
                            r#type: "time",
                            value: "{pending.close_time}",
                            oninput: move |evt| {
                                if let Some(clinic) = edit.write().as_mut() {
                                    clinic.close_time = evt.value();
                                }
                            },
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_update,
                        "Update Clinic"
                    }
                }
            }

            if let Some(message) = notice() {
                Modal {
                    title: "Success",
                    on_close: move |_| notice.set(None),
                    p { "{message}" }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| notice.set(None),
                        "Close"
                    }
                }
            }
        }
    }
}
