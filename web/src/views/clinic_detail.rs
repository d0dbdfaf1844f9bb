//! Clinic detail: one clinic's record plus assignment management for the
//! doctors working there.
//!
//! Fetch order is strictly sequential: the clinic record first, then its
//! doctor list, then the global doctor list. A failure at any stage alerts
//! and stops the remaining fetches for this mount.

use api::{lists, Clinic, ClinicDoctor, Doctor};
use chrono::Utc;
use dioxus::prelude::*;
use ui::{alert, use_session, Modal};

use crate::views::api_client;

#[component]
pub fn ClinicDetail(id: i64) -> Element {
    // Track the route param in a signal so the loader re-runs when the user
    // navigates between clinic pages.
    let mut id_signal = use_signal(|| id);
    if *id_signal.peek() != id {
        id_signal.set(id);
    }

    let session = use_session();
    let mut clinic = use_signal(|| Option::<Clinic>::None);
    let mut doctors = use_signal(Vec::<ClinicDoctor>::new);
    let mut all_doctors = use_signal(Vec::<Doctor>::new);
    let mut loading = use_signal(|| true);
    let mut show_assign = use_signal(|| false);
    let mut picked = use_signal(|| Option::<i64>::None);

    let _loader = use_resource(move || {
        let clinic_id = id_signal();
        async move {
            loading.set(true);
            clinic.set(None);
            let token = session.peek().token.clone();
            let client = api_client();

            let record = match client.clinic(token.as_deref(), clinic_id).await {
                Ok(record) => record,
                Err(e) => {
                    tracing::error!("fetching clinic {clinic_id}: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while fetching the clinic details"),
                    );
                    loading.set(false);
                    return;
                }
            };
            clinic.set(Some(record));

            match client.clinic_doctors(token.as_deref(), clinic_id).await {
                Ok(list) => doctors.set(list),
                Err(e) => {
                    tracing::error!("fetching clinic doctors: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while fetching the doctors"),
                    );
                    loading.set(false);
                    return;
                }
            }

            match client.doctors(token.as_deref()).await {
                Ok(list) => all_doctors.set(list),
                Err(e) => {
                    tracing::error!("fetching all doctors: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while fetching all doctors"),
                    );
                }
            }
            loading.set(false);
        }
    });

    let handle_assign = move |_| {
        spawn(async move {
            let Some(doctor_id) = picked() else {
                alert("Please select a doctor to add.");
                return;
            };
            let clinic_id = *id_signal.peek();
            let token = session.peek().token.clone();
            let client = api_client();

            // The server stamps the assignment with today's date.
            let today = Utc::now().date_naive();
            match client
                .assign_doctor(token.as_deref(), clinic_id, doctor_id, today)
                .await
            {
                Ok(_) => {
                    // Re-fetch instead of merging locally: only the server
                    // knows the stamped start date.
                    match client.clinic_doctors(token.as_deref(), clinic_id).await {
                        Ok(list) => doctors.set(list),
                        Err(e) => {
                            tracing::error!("refreshing clinic doctors: {e}");
                            alert(
                                e.server_message()
                                    .unwrap_or("An error occurred while fetching the doctors"),
                            );
                        }
                    }
                    picked.set(None);
                    show_assign.set(false);
                    alert("Doctor added successfully!");
                }
                Err(e) => {
                    tracing::error!("assigning doctor {doctor_id}: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while adding the doctor"),
                    );
                }
            }
        });
    };

    let handle_remove = move |doctor_id: i64| {
        spawn(async move {
            let clinic_id = *id_signal.peek();
            let token = session.peek().token.clone();
            match api_client()
                .unassign_doctor(token.as_deref(), clinic_id, doctor_id)
                .await
            {
                Ok(()) => {
                    lists::remove_by_id(&mut doctors.write(), doctor_id);
                    alert("Doctor removed successfully!");
                }
                Err(e) => {
                    tracing::error!("removing doctor {doctor_id}: {e}");
                    alert(
                        e.server_message()
                            .unwrap_or("An error occurred while removing the doctor"),
                    );
                }
            }
        });
    };

    if loading() {
        return rsx! {
            div { class: "page", "Loading..." }
        };
    }

    let Some(record) = clinic() else {
        return rsx! {
            div { class: "page form-error", "Error: Clinic details not found" }
        };
    };

    let available = lists::available_doctors(&all_doctors(), &doctors());

    rsx! {
        div {
            class: "page",
            h2 { "Clinic Details" }
            div {
                class: "card",
                h3 { "{record.name}" }
                p { strong { "Address: " } "{record.address}" }
                p { strong { "Phone Number: " } "{record.phone_number}" }
                p { strong { "Open Time: " } "{record.open_time}" }
                p { strong { "Close Time: " } "{record.close_time}" }
            }

            h3 { "Doctors at this Clinic" }
            if doctors().is_empty() {
                p { "No doctors are working at this clinic." }
            } else {
                table {
                    class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Phone" }
                            th { "Specialization" }
                            th { "Start Date" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for doctor in doctors() {
                            tr {
                                key: "{doctor.id}",
                                td { "{doctor.name}" }
                                td { "{doctor.phone}" }
                                td { "{doctor.specialization}" }
                                td { "{doctor.start_date}" }
                                td {
                                    button {
                                        class: "btn btn-danger btn-sm",
                                        onclick: move |_| handle_remove(doctor.id),
                                        "Remove"
                                    }
                                }
                            }
                        }
                    }
                }
            }

            button {
                class: "btn btn-primary",
                onclick: move |_| show_assign.set(true),
                "Assign Doctor"
            }

            if show_assign() {
                Modal {
                    title: "Add Doctor to Clinic",
                    on_close: move |_| show_assign.set(false),
                    div {
                        class: "form-field",
                        label { "Select Doctor" }
                        select {
                            class: "form-input",
                            onchange: move |evt| picked.set(evt.value().parse().ok()),
                            option { value: "", "Select a doctor" }
                            for doctor in available {
                                option {
                                    key: "{doctor.id}",
                                    value: "{doctor.id}",
                                    "{doctor.name} (ID: {doctor.id})"
                                }
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: handle_assign,
                        "Add Doctor"
                    }
                }
            }
        }
    }
}
