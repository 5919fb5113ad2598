//! Chat session: the form fields, the message log and the owned socket.
//!
//! DESIGN
//! ======
//! The session is a plain struct handed by reference to whichever front end
//! drives it (the Leptos view or the terminal loop). The socket is an
//! exclusively owned [`Connection`] field that is replaced wholesale
//! whenever the username or room changes; dropping the old value closes it.
//!
//! Inputs are not validated beyond what the protocol needs: a socket opens
//! only when both username and room are non-empty, and a message is sent
//! only when the draft is non-empty.
//!
//! Each open gets a fresh [`SocketId`]. Closing is advisory, so a replaced
//! socket may still deliver frames (appended like any other) or fail late.
//! Late failures are discarded unless they come from the live socket.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::ChatError;
use crate::net::endpoint::room_url;
use crate::net::socket::{Connector, SocketEvent, SocketId};
use crate::net::types::{ChatMessage, OutboundMessage};
use crate::state::connection::{Connection, ConnectionStatus};

pub struct Session<C: Connector> {
    connector: C,
    endpoint: String,
    username: String,
    room: String,
    draft: String,
    messages: Vec<ChatMessage>,
    connection: Option<Connection<C::Socket>>,
    next_socket: SocketId,
    last_error: Option<String>,
}

impl<C: Connector> Session<C> {
    /// Create a disconnected session that will open sockets under `endpoint`.
    pub fn new(connector: C, endpoint: impl Into<String>) -> Self {
        Self {
            connector,
            endpoint: endpoint.into(),
            username: String::new(),
            room: String::new(),
            draft: String::new(),
            messages: Vec::new(),
            connection: None,
            next_socket: SocketId::default(),
            last_error: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Every entry in arrival order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn status(&self) -> ConnectionStatus {
        if self.connection.is_some() {
            ConnectionStatus::Connected
        } else {
            ConnectionStatus::Disconnected
        }
    }

    /// URL of the live socket, if any.
    pub fn connected_url(&self) -> Option<&str> {
        self.connection.as_ref().map(Connection::url)
    }

    /// Id of the live socket, if any.
    pub fn socket_id(&self) -> Option<SocketId> {
        self.connection.as_ref().map(Connection::id)
    }

    /// Most recent transport failure, cleared by the next successful open.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Change the username, reconnecting if the value differs.
    pub fn set_username(&mut self, username: impl Into<String>) {
        let username = username.into();
        if username == self.username {
            return;
        }
        self.username = username;
        self.reconnect();
    }

    /// Change the room, reconnecting if the value differs.
    pub fn set_room(&mut self, room: impl Into<String>) {
        let room = room.into();
        if room == self.room {
            return;
        }
        self.room = room;
        self.reconnect();
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Send the draft to the room and clear it.
    ///
    /// Does nothing without a socket or with an empty draft. A transport
    /// failure is logged and the frame is dropped; the draft is cleared
    /// either way. Returns `true` when the transport accepted the frame.
    pub fn send_message(&mut self) -> bool {
        let Some(connection) = self.connection.as_mut() else {
            return false;
        };
        if self.draft.is_empty() {
            return false;
        }

        let outbound = OutboundMessage {
            username: &self.username,
            text: &self.draft,
            room: &self.room,
        };
        let accepted = match outbound.to_frame() {
            Ok(frame) => match connection.send(frame) {
                Ok(()) => true,
                Err(e) => {
                    log::warn!("dropping outbound message: {e}");
                    false
                }
            },
            Err(e) => {
                log::warn!("dropping outbound message: {e}");
                false
            }
        };

        self.draft.clear();
        accepted
    }

    /// Decode one inbound frame and append it to the log.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Decode`] for frames that are not chat messages;
    /// the log is left unchanged.
    pub fn receive_frame(&mut self, raw: &str) -> Result<(), ChatError> {
        let message = ChatMessage::from_frame(raw)?;
        self.messages.push(message);
        Ok(())
    }

    /// Apply one event delivered by the connector.
    pub fn handle_event(&mut self, event: SocketEvent) {
        match event {
            SocketEvent::Frame { raw, .. } => {
                if let Err(e) = self.receive_frame(&raw) {
                    log::warn!("dropping inbound frame: {e}");
                }
            }
            SocketEvent::Error { socket, message } => {
                if self.socket_id() == Some(socket) {
                    self.last_error = Some(message);
                } else {
                    log::debug!("ignoring error from replaced websocket {socket}: {message}");
                }
            }
        }
    }

    /// Append an entry that did not come from the room.
    pub fn push_local(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Close the current socket, if any.
    pub fn disconnect(&mut self) {
        drop(self.connection.take());
    }

    fn reconnect(&mut self) {
        self.disconnect();
        if self.username.is_empty() || self.room.is_empty() {
            return;
        }

        let url = room_url(&self.endpoint, &self.username, &self.room);
        let id = self.next_socket;
        self.next_socket = id.next();
        match Connection::open(&mut self.connector, id, url) {
            Ok(connection) => {
                self.connection = Some(connection);
                self.last_error = None;
            }
            Err(e) => {
                log::warn!("websocket open failed: {e}");
                self.last_error = Some(e.to_string());
            }
        }
    }
}
