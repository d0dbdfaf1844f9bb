//! # API crate — HTTP gateway for the ClinicDesk backend
//!
//! Everything the frontends need to talk to the clinic directory server lives
//! here: the wire-format records, the request client, and the pure list-merge
//! helpers the views apply to their local copies of server data.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: one operation per (resource, verb) pair, Bearer auth attached when a token is present |
//! | [`error`] | [`ApiError`]: server-reported messages, bare HTTP statuses, transport and decode failures |
//! | [`lists`] | Id-based list merges (`replace_by_id`, `remove_by_id`) and the available-doctors set difference |
//! | [`models`] | Serde records mirroring the server's JSON shapes exactly |
//!
//! The client performs no retries, caching, or request coordination: each call
//! is a single round trip, and the caller owns failure display and the rule
//! that local state is only touched on success.

pub mod client;
pub mod error;
pub mod lists;
pub mod models;

pub use client::{default_base_url, ApiClient};
pub use error::ApiError;
pub use models::{
    Assignment, Clinic, ClinicDoctor, ClinicDraft, Doctor, DoctorDraft, LoginResponse, UserProfile,
};
