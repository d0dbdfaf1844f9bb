//! Wire-format records. Field names follow the server's camelCase JSON; the
//! client never transforms them beyond field-level editing.

use serde::{Deserialize, Serialize};

/// The signed-in user's identity, as returned by `GET /profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub role: String,
}

/// A clinic record. `id` is server-assigned and immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clinic {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub open_time: String,
    pub close_time: String,
}

/// The editable clinic fields, used as the `POST /clinics` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicDraft {
    pub name: String,
    pub address: String,
    pub phone_number: String,
    pub open_time: String,
    pub close_time: String,
}

/// A doctor record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub phone: String,
}

/// The editable doctor fields, used as the `POST /doctors` body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DoctorDraft {
    pub name: String,
    pub specialization: String,
    pub phone: String,
}

/// A doctor as listed under a clinic (`GET /clinics/:id/doctors`), carrying
/// the start date of the assignment. The date is kept as the server's
/// `YYYY-MM-DD` string and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicDoctor {
    pub id: i64,
    pub name: String,
    pub specialization: String,
    pub phone: String,
    #[serde(default)]
    pub start_date: String,
}

/// Response of the assign call. The client only cares that the call
/// succeeded, so every field tolerates absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default)]
    pub doctor_id: Option<i64>,
    #[serde(default)]
    pub clinic_id: Option<i64>,
    #[serde(default)]
    pub start_date: Option<String>,
}

/// Credentials sent to `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// The bearer token issued at login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}
