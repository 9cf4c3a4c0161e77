//! Types stored in the session.

pub mod session;

pub use session::{Flash, keys as session_keys};
