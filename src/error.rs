//! Error types shared by the session core and both front ends.

/// Failure while configuring, opening, or talking over a chat socket.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    /// The configured WebSocket base URL is not usable.
    #[error("invalid websocket endpoint: {0}")]
    InvalidEndpoint(String),
    /// The transport refused to open a socket.
    #[error("websocket connect failed: {0}")]
    Connect(String),
    /// The transport refused an outbound frame.
    #[error("websocket send failed: {0}")]
    Send(String),
    /// An inbound frame was not a chat message.
    #[error("frame decode failed: {0}")]
    Decode(#[source] serde_json::Error),
    /// An outbound message could not be serialized.
    #[error("frame encode failed: {0}")]
    Encode(#[source] serde_json::Error),
    /// This build has no socket implementation.
    #[error("websocket transport unavailable in this build")]
    Offline,
}

/// Failure while turning a quote service response into a chat line.
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("invalid CSV data format")]
    Malformed,
    #[error("unreadable CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("stock price data is not available for the requested stock")]
    Unavailable,
    #[error("invalid stock price: {0}")]
    Price(#[from] std::num::ParseFloatError),
    #[error("quote request failed: {0}")]
    Http(String),
}
