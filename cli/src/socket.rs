//! `tokio-tungstenite` transport for the terminal client.
//!
//! Each opened socket runs on its own task. The session talks to it through
//! an outbound queue; the task reports inbound frames and failures on the
//! shared event channel. Dropping the outbound queue sends a close frame and
//! ends the task.

use futures_util::{SinkExt, StreamExt};
use roomchat::error::ChatError;
use roomchat::net::socket::{ChatSocket, Connector, SocketEvent, SocketId};
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

pub struct TokioConnector {
    events: mpsc::UnboundedSender<SocketEvent>,
}

impl TokioConnector {
    pub fn new(events: mpsc::UnboundedSender<SocketEvent>) -> Self {
        Self { events }
    }
}

pub struct TokioSocket {
    outbound: Option<mpsc::UnboundedSender<String>>,
}

impl Connector for TokioConnector {
    type Socket = TokioSocket;

    fn open(&mut self, id: SocketId, url: &str) -> Result<TokioSocket, ChatError> {
        let (outbound, outbound_rx) = mpsc::unbounded_channel();
        tokio::spawn(run_socket(id, url.to_owned(), outbound_rx, self.events.clone()));
        Ok(TokioSocket { outbound: Some(outbound) })
    }
}

impl ChatSocket for TokioSocket {
    fn send_text(&mut self, text: String) -> Result<(), ChatError> {
        let Some(outbound) = &self.outbound else {
            return Err(ChatError::Send("socket closed".to_owned()));
        };
        outbound.send(text).map_err(|e| ChatError::Send(e.to_string()))
    }

    fn close(&mut self) {
        self.outbound = None;
    }
}

async fn run_socket(
    id: SocketId,
    url: String,
    mut outbound: mpsc::UnboundedReceiver<String>,
    events: mpsc::UnboundedSender<SocketEvent>,
) {
    let stream = match connect_async(url.as_str()).await {
        Ok((stream, _)) => stream,
        Err(error) => {
            tracing::warn!(%id, %url, %error, "websocket connect failed");
            let _ = events.send(SocketEvent::Error {
                socket: id,
                message: format!("websocket connect failed: {error}"),
            });
            return;
        }
    };
    tracing::info!(%id, %url, "websocket connected");

    let (mut ws_write, mut ws_read) = stream.split();
    loop {
        tokio::select! {
            next = outbound.recv() => match next {
                Some(text) => {
                    if let Err(error) = ws_write.send(Message::text(text)).await {
                        tracing::warn!(%id, %url, %error, "websocket send failed");
                        let _ = events.send(SocketEvent::Error {
                            socket: id,
                            message: format!("websocket send failed: {error}"),
                        });
                        break;
                    }
                }
                None => {
                    let _ = ws_write.close().await;
                    break;
                }
            },
            inbound = ws_read.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    let event = SocketEvent::Frame { socket: id, raw: text.as_str().to_owned() };
                    if events.send(event).is_err() {
                        break;
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(error)) => {
                    tracing::warn!(%id, %url, %error, "websocket receive failed");
                    let _ = events.send(SocketEvent::Error {
                        socket: id,
                        message: format!("websocket receive failed: {error}"),
                    });
                    break;
                }
            },
        }
    }

    tracing::info!(%id, %url, "websocket closed");
}

#[cfg(test)]
#[path = "socket_test.rs"]
mod socket_test;
