//! Networking modules for the room chat protocol.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema, `endpoint` builds room URLs,
//! `socket` is the seam to a concrete WebSocket transport, and `stock`
//! handles the `/stock=CODE` command.

pub mod endpoint;
pub mod socket;
pub mod stock;
pub mod types;
