//! Socket seam between the session core and a concrete WebSocket transport.
//!
//! A [`Connector`] begins opening a socket and hands back a [`ChatSocket`]
//! handle immediately; the handshake completes in the background. Inbound
//! frames and transport errors flow back to the session as [`SocketEvent`]s
//! over a channel the connector was built with, so the session is only ever
//! mutated from the task that owns it.
//!
//! Every event carries the [`SocketId`] the session assigned at open time.
//! A replaced socket can still report after the session has moved on, and
//! the id is how those reports are told apart from the live socket's.
//!
//! The browser transport lives here behind `#[cfg(feature = "csr")]`.

use std::fmt;

use crate::error::ChatError;

/// Session-assigned number of one opened socket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SocketId(pub u64);

impl SocketId {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something that came off a socket and needs applying to the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SocketEvent {
    /// One inbound text frame.
    Frame { socket: SocketId, raw: String },
    /// The transport failed after the socket was handed out.
    Error { socket: SocketId, message: String },
}

/// Opens sockets for a session.
pub trait Connector {
    type Socket: ChatSocket;

    /// Begin opening a socket to `url`, tagging its events with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Connect`] when the transport rejects the URL
    /// outright. Failures during the handshake arrive later as
    /// [`SocketEvent::Error`].
    fn open(&mut self, id: SocketId, url: &str) -> Result<Self::Socket, ChatError>;
}

/// Handle to one open (or opening) socket.
pub trait ChatSocket {
    /// Queue one text frame for transmission.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Send`] when the socket can no longer accept frames.
    fn send_text(&mut self, text: String) -> Result<(), ChatError>;

    /// Ask the transport to close. Frames already in flight may still arrive.
    fn close(&mut self);
}

/// Connector for builds without a WebSocket transport.
///
/// Every open is refused, so rendering the view outside a browser never
/// touches the network.
#[cfg(not(feature = "csr"))]
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineConnector;

/// Socket type of [`OfflineConnector`]; it can never be constructed.
#[cfg(not(feature = "csr"))]
#[derive(Debug)]
pub enum OfflineSocket {}

#[cfg(not(feature = "csr"))]
impl Connector for OfflineConnector {
    type Socket = OfflineSocket;

    fn open(&mut self, _id: SocketId, _url: &str) -> Result<OfflineSocket, ChatError> {
        Err(ChatError::Offline)
    }
}

#[cfg(not(feature = "csr"))]
impl ChatSocket for OfflineSocket {
    fn send_text(&mut self, _text: String) -> Result<(), ChatError> {
        match *self {}
    }

    fn close(&mut self) {
        match *self {}
    }
}

/// Browser connector backed by `gloo-net`.
#[cfg(feature = "csr")]
#[derive(Clone, Debug)]
pub struct BrowserConnector {
    events: futures::channel::mpsc::UnboundedSender<SocketEvent>,
}

#[cfg(feature = "csr")]
impl BrowserConnector {
    pub fn new(events: futures::channel::mpsc::UnboundedSender<SocketEvent>) -> Self {
        Self { events }
    }
}

/// Outbound half of a browser socket. Closing drops the writer queue, which
/// ends the socket task and closes the underlying `WebSocket`.
#[cfg(feature = "csr")]
#[derive(Debug)]
pub struct BrowserSocket {
    outbound: futures::channel::mpsc::UnboundedSender<String>,
}

#[cfg(feature = "csr")]
impl Connector for BrowserConnector {
    type Socket = BrowserSocket;

    fn open(&mut self, id: SocketId, url: &str) -> Result<BrowserSocket, ChatError> {
        use gloo_net::websocket::futures::WebSocket;

        let ws = WebSocket::open(url).map_err(|e| ChatError::Connect(e.to_string()))?;
        let (outbound, outbound_rx) = futures::channel::mpsc::unbounded::<String>();
        leptos::task::spawn_local(run_browser_socket(id, url.to_owned(), ws, outbound_rx, self.events.clone()));
        Ok(BrowserSocket { outbound })
    }
}

#[cfg(feature = "csr")]
impl ChatSocket for BrowserSocket {
    fn send_text(&mut self, text: String) -> Result<(), ChatError> {
        self.outbound
            .unbounded_send(text)
            .map_err(|e| ChatError::Send(e.to_string()))
    }

    fn close(&mut self) {
        self.outbound.close_channel();
    }
}

/// Pump one browser socket until either side finishes.
#[cfg(feature = "csr")]
async fn run_browser_socket(
    id: SocketId,
    url: String,
    ws: gloo_net::websocket::futures::WebSocket,
    mut outbound: futures::channel::mpsc::UnboundedReceiver<String>,
    events: futures::channel::mpsc::UnboundedSender<SocketEvent>,
) {
    use futures::{SinkExt, StreamExt};
    use gloo_net::websocket::{Message, WebSocketError};

    let (mut ws_write, mut ws_read) = ws.split();

    let send_task = async {
        while let Some(text) = outbound.next().await {
            if let Err(e) = ws_write.send(Message::Text(text)).await {
                log::warn!("websocket send failed: {e}");
                break;
            }
        }
        let _ = ws_write.close().await;
    };

    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if events.unbounded_send(SocketEvent::Frame { socket: id, raw: text }).is_err() {
                        break;
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(WebSocketError::ConnectionClose(event)) if event.was_clean => break,
                Err(e) => {
                    log::warn!("websocket {id} error: {e}");
                    let _ = events.unbounded_send(SocketEvent::Error {
                        socket: id,
                        message: e.to_string(),
                    });
                    break;
                }
            }
        }
    };

    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;
    log::info!("websocket {id} closed: {url}");
}
