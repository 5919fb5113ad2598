//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `chat_view` owns the session signal and the socket event pump;
//! `message_list` only renders what it is given.

pub mod chat_view;
pub mod message_list;
