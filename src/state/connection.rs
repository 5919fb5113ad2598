//! Scoped ownership of one chat socket.
//!
//! DESIGN
//! ======
//! A [`Connection`] is acquired when the session has both a username and a
//! room, and released by dropping it. Dropping is the only way a socket gets
//! closed, so every exit path (field change, explicit disconnect, session
//! teardown) closes exactly once.

#[cfg(test)]
#[path = "connection_test.rs"]
mod connection_test;

use crate::error::ChatError;
use crate::net::socket::{ChatSocket, Connector, SocketId};

/// Whether the session currently owns a socket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connected,
}

/// Guard owning an open socket; closes it on drop.
#[derive(Debug)]
pub struct Connection<S: ChatSocket> {
    socket: S,
    id: SocketId,
    url: String,
}

impl<S: ChatSocket> Connection<S> {
    /// Open socket `id` to `url` through `connector`.
    ///
    /// # Errors
    ///
    /// Propagates the connector's refusal.
    pub fn open<C>(connector: &mut C, id: SocketId, url: String) -> Result<Self, ChatError>
    where
        C: Connector<Socket = S>,
    {
        let socket = connector.open(id, &url)?;
        log::info!("websocket {id} opened: {url}");
        Ok(Self { socket, id, url })
    }

    pub fn id(&self) -> SocketId {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Hand one frame to the transport.
    ///
    /// # Errors
    ///
    /// Propagates [`ChatError::Send`] from the socket.
    pub fn send(&mut self, frame: String) -> Result<(), ChatError> {
        self.socket.send_text(frame)
    }
}

impl<S: ChatSocket> Drop for Connection<S> {
    fn drop(&mut self) {
        self.socket.close();
        log::debug!("websocket {} close requested: {}", self.id, self.url);
    }
}
