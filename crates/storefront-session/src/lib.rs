//! Session-token issuing, validation, and cookie construction.
//!
//! The session is a bearer JWT carried in an HTTP-only cookie. There is no
//! server-side session table or revocation list: expiry is the only
//! termination mechanism, and logout merely removes the client's copy.

pub mod cookie;
pub mod token;
