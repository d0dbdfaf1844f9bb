//! Doctor management: the full CRUD surface over `/doctors`.
//!
//! Same pattern as the clinic list; success feedback uses a plain alert
//! rather than a notice modal.

use api::{lists, Doctor, DoctorDraft};
use dioxus::prelude::*;
use ui::{alert, use_session, Modal};

use crate::views::api_client;
use crate::Route;

#[component]
pub fn Doctors() -> Element {
    let session = use_session();
    let mut doctors = use_signal(Vec::<Doctor>::new);
    let mut draft = use_signal(DoctorDraft::default);
    let mut edit = use_signal(|| Option::<Doctor>::None);
    let mut show_add = use_signal(|| false);

    let _loader = use_resource(move || async move {
        let token = session.peek().token.clone();
        match api_client().doctors(token.as_deref()).await {
            Ok(list) => doctors.set(list),
            Err(e) => {
                tracing::error!("fetching doctors: {e}");
                alert(
                    e.server_message()
                        .unwrap_or("An error occurred while fetching doctors"),
                );
            }
        }
    });

    let handle_add = move |_| {
        spawn(async move {
            let token = session.peek().token.clone();
            match api_client().create_doctor(token.as_deref(), &draft()).await {
                Ok(created) => {
                    doctors.write().push(created);
                    draft.set(DoctorDraft::default());
                    show_add.set(false);
                    alert("Doctor added successfully!");
                }
                Err(e) => {
                    tracing::error!("adding doctor: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while adding the doctor"),
                    );
                }
            }
        });
    };

    let handle_update = move |_| {
        spawn(async move {
            let Some(pending) = edit() else { return };
            let token = session.peek().token.clone();
            match api_client().update_doctor(token.as_deref(), &pending).await {
                Ok(updated) => {
                    lists::replace_by_id(&mut doctors.write(), updated);
                    edit.set(None);
                    alert("Doctor updated successfully!");
                }
                Err(e) => {
                    tracing::error!("updating doctor: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while updating the doctor"),
                    );
                }
            }
        });
    };

    let handle_delete = move |id: i64| {
        spawn(async move {
            let token = session.peek().token.clone();
            match api_client().delete_doctor(token.as_deref(), id).await {
                Ok(()) => {
                    lists::remove_by_id(&mut doctors.write(), id);
                    alert("Doctor deleted successfully!");
                }
                Err(e) => {
                    tracing::error!("deleting doctor: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while deleting the doctor"),
                    );
                }
            }
        });
    };

    rsx! {
        div {
            class: "page",
            h1 { "Doctor Management" }

            button {
                class: "btn btn-primary",
                onclick: move |_| show_add.set(true),
                "Add New Doctor"
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "Specialization" }
                        th { "Phone" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for doctor in doctors() {
                        tr {
                            key: "{doctor.id}",
                            td { "{doctor.name}" }
                            td { "{doctor.specialization}" }
                            td { "{doctor.phone}" }
                            td {
                                button {
                                    class: "btn btn-warning btn-sm",
                                    onclick: {
                                        let doctor = doctor.clone();
                                        move |_| edit.set(Some(doctor.clone()))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-danger btn-sm",
                                    onclick: move |_| handle_delete(doctor.id),
                                    "Delete"
                                }
                                Link {
                                    class: "btn btn-info btn-sm",
                                    to: Route::DoctorDetail { id: doctor.id },
                                    "View Details"
                                }
                            }
                        }
                    }
                }
            }

            if show_add() {
                Modal {
                    title: "Add New Doctor",
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
                        label { "Specialization" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{draft().specialization}",
                            oninput: move |evt| draft.write().specialization = evt.value(),
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Phone" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{draft().phone}",
                            oninput: move |evt| draft.write().phone = evt.value(),
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_add,
                        "Add Doctor"
                    }
                }
            }

            if let Some(pending) = edit() {
                Modal {
                    title: "Edit Doctor",
                    on_close: move |_| edit.set(None),
                    div {
                        class: "form-field",
                        label { "Name" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{pending.name}",
                            oninput: move |evt| {
                                if let Some(doctor) = edit.write().as_mut() {
                                    doctor.name = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Specialization" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{pending.specialization}",
                            oninput: move |evt| {
                                if let Some(doctor) = edit.write().as_mut() {
                                    doctor.specialization = evt.value();
                                }
                            },
                        }
                    }
                    div {
                        class: "form-field",
                        label { "Phone" }
                        input {
                            class: "form-input",
                            r#type: "text",
                            value: "{pending.phone}",
                            oninput: move |evt| {
                                if let Some(doctor) = edit.write().as_mut() {
                                    doctor.phone = evt.value();
                                }
                            },
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_update,
                        "Update Doctor"
                    }
                }
            }
        }
    }
}
