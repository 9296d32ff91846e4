//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account, identified by email
//! - [`Chirp`] - A short post owned by a user
//!
//! Creation inputs use separate structs (`NewChirp`) so that identity and
//! timestamps are always assigned by the store.

pub mod chirp;
pub mod user;

pub use chirp::{Chirp, NewChirp};
pub use user::User;
