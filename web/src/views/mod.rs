use api::ApiClient;

mod login;
pub use login::Login;

mod profile;
pub use profile::Profile;

mod clinics;
pub use clinics::Clinics;

mod clinic_detail;
pub use clinic_detail::ClinicDetail;

mod doctors;
pub use doctors::Doctors;

mod doctor_detail;
pub use doctor_detail::DoctorDetail;

/// Gateway handle for a single call. Constructed per action; the client
/// itself is stateless beyond the base URL.
pub(crate) fn api_client() -> ApiClient {
    ApiClient::new(api::default_base_url())
}
