//! Shared UI building blocks for the ClinicDesk workspace.

mod session;
pub use session::{clear_token, store_token, use_session, SessionProvider, SessionState, TOKEN_KEY};

mod navbar;
pub use navbar::Navbar;

mod modal;
pub use modal::Modal;

mod alert;
pub use alert::alert;
