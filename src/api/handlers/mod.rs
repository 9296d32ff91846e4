//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod chirps;
pub mod health;
pub mod login;
pub mod users;
pub mod validate_chirp;

pub use chirps::{create_chirp_handler, get_chirp_handler, list_chirps_handler};
pub use health::readiness_handler;
pub use login::login_handler;
pub use users::create_user_handler;
pub use validate_chirp::validate_chirp_handler;
