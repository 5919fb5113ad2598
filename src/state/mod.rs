//! Client-side chat state.
//!
//! DESIGN
//! ======
//! `session` owns everything the view renders; `connection` is the guard that
//! ties one socket's lifetime to the session's username/room pair.

pub mod connection;
pub mod session;

#[cfg(test)]
pub(crate) mod test_support;
