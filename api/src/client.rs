//! The HTTP gateway: one operation per (resource, verb) pair.
//!
//! Every authenticated call attaches `Authorization: Bearer <token>` when a
//! token is given; the policy is uniform across protected resources, doctors
//! included. There are no retries, timeouts, or cancellation here; each call
//! is a single round trip.

use chrono::NaiveDate;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{
    Assignment, Clinic, ClinicDoctor, ClinicDraft, Doctor, DoctorDraft, LoginRequest,
    LoginResponse, UserProfile,
};

/// Backend base URL: `CLINICDESK_API_BASE` at compile time, else the local
/// development server. The only piece of configuration the client has.
pub fn default_base_url() -> String {
    option_env!("CLINICDESK_API_BASE")
        .unwrap_or("http://localhost:3001")
        .to_string()
}

/// Structured error body the server sends alongside non-2xx statuses.
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// `GET /clinics/:id/doctors` wraps its list in an envelope.
#[derive(Deserialize)]
struct ClinicDoctorsEnvelope {
    doctors: Vec<ClinicDoctor>,
}

#[derive(Serialize)]
struct AssignBody {
    #[serde(rename = "startDate")]
    start_date: NaiveDate,
}

/// Client for the clinic directory backend.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, token: Option<&str>) -> RequestBuilder {
        let mut request = self
            .http
            .request(method, format!("{}{path}", self.base_url));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request
    }

    /// Issue the request and decode a JSON body on success. Non-2xx responses
    /// become [`ApiError::Server`] when the body carries `{ "error": ... }`,
    /// [`ApiError::Status`] otherwise.
    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            response.json::<T>().await.map_err(ApiError::Decode)
        } else {
            match response.json::<ErrorBody>().await {
                Ok(body) => Err(ApiError::Server {
                    status: status.as_u16(),
                    message: body.error,
                }),
                Err(_) => Err(ApiError::Status {
                    status: status.as_u16(),
                }),
            }
        }
    }

    /// Like [`Self::send`] but for calls whose response body is irrelevant.
    async fn send_unit(request: RequestBuilder) -> Result<(), ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        match response.json::<ErrorBody>().await {
            Ok(body) => Err(ApiError::Server {
                status: status.as_u16(),
                message: body.error,
            }),
            Err(_) => Err(ApiError::Status {
                status: status.as_u16(),
            }),
        }
    }

    // --- auth -------------------------------------------------------------

    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        Self::send(self.request(Method::POST, "/login", None).json(&body)).await
    }

    pub async fn profile(&self, token: Option<&str>) -> Result<UserProfile, ApiError> {
        Self::send(self.request(Method::GET, "/profile", token)).await
    }

    // --- clinics ----------------------------------------------------------

    pub async fn clinics(&self, token: Option<&str>) -> Result<Vec<Clinic>, ApiError> {
        Self::send(self.request(Method::GET, "/clinics", token)).await
    }

    pub async fn create_clinic(
        &self,
        token: Option<&str>,
        draft: &ClinicDraft,
    ) -> Result<Clinic, ApiError> {
        Self::send(self.request(Method::POST, "/clinics", token).json(draft)).await
    }

    pub async fn clinic(&self, token: Option<&str>, id: i64) -> Result<Clinic, ApiError> {
        Self::send(self.request(Method::GET, &format!("/clinics/{id}"), token)).await
    }

    /// `PUT /clinics/:id` with the full record (id included) as the body,
    /// matching what the server expects. Returns the server's copy, which the
    /// caller merges back into its list by id.
    pub async fn update_clinic(
        &self,
        token: Option<&str>,
        clinic: &Clinic,
    ) -> Result<Clinic, ApiError> {
        Self::send(
            self.request(Method::PUT, &format!("/clinics/{}", clinic.id), token)
                .json(clinic),
        )
        .await
    }

    pub async fn delete_clinic(&self, token: Option<&str>, id: i64) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::DELETE, &format!("/clinics/{id}"), token)).await
    }

    // --- assignments ------------------------------------------------------

    /// Doctors currently working at a clinic, unwrapped from the
    /// `{ "doctors": [...] }` envelope.
    pub async fn clinic_doctors(
        &self,
        token: Option<&str>,
        clinic_id: i64,
    ) -> Result<Vec<ClinicDoctor>, ApiError> {
        let envelope: ClinicDoctorsEnvelope = Self::send(self.request(
            Method::GET,
            &format!("/clinics/{clinic_id}/doctors"),
            token,
        ))
        .await?;
        Ok(envelope.doctors)
    }

    /// Assign a doctor to a clinic. The body carries the start date as
    /// `YYYY-MM-DD`; the caller passes today's date.
    pub async fn assign_doctor(
        &self,
        token: Option<&str>,
        clinic_id: i64,
        doctor_id: i64,
        start_date: NaiveDate,
    ) -> Result<Assignment, ApiError> {
        let body = AssignBody { start_date };
        Self::send(
            self.request(
                Method::POST,
                &format!("/clinics/{clinic_id}/workAt-clinic/{doctor_id}"),
                token,
            )
            .json(&body),
        )
        .await
    }

    pub async fn unassign_doctor(
        &self,
        token: Option<&str>,
        clinic_id: i64,
        doctor_id: i64,
    ) -> Result<(), ApiError> {
        Self::send_unit(self.request(
            Method::DELETE,
            &format!("/clinics/{clinic_id}/workAt-clinic/{doctor_id}"),
            token,
        ))
        .await
    }

    // --- doctors ----------------------------------------------------------

    pub async fn doctors(&self, token: Option<&str>) -> Result<Vec<Doctor>, ApiError> {
        Self::send(self.request(Method::GET, "/doctors", token)).await
    }

    pub async fn create_doctor(
        &self,
        token: Option<&str>,
        draft: &DoctorDraft,
    ) -> Result<Doctor, ApiError> {
        Self::send(self.request(Method::POST, "/doctors", token).json(draft)).await
    }

    pub async fn doctor(&self, token: Option<&str>, id: i64) -> Result<Doctor, ApiError> {
        Self::send(self.request(Method::GET, &format!("/doctors/{id}"), token)).await
    }

    pub async fn update_doctor(
        &self,
        token: Option<&str>,
        doctor: &Doctor,
    ) -> Result<Doctor, ApiError> {
        Self::send(
            self.request(Method::PUT, &format!("/doctors/{}", doctor.id), token)
                .json(doctor),
        )
        .await
    }

    pub async fn delete_doctor(&self, token: Option<&str>, id: i64) -> Result<(), ApiError> {
        Self::send_unit(self.request(Method::DELETE, &format!("/doctors/{id}"), token)).await
    }
}
