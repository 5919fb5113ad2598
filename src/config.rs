//! Endpoint configuration.
//!
//! Browser builds take their settings from the build environment; the
//! terminal client passes values it read at run time into
//! [`ChatConfig::from_parts`].

use crate::error::ChatError;

pub const DEFAULT_WS_URL: &str = "ws://localhost:8080/ws";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// WebSocket base URL; username and room are appended as query values.
    pub ws_url: String,
    /// Quote lookup template for `/stock=CODE`; lookups are off when `None`.
    pub stock_url: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self { ws_url: DEFAULT_WS_URL.to_owned(), stock_url: None }
    }
}

impl ChatConfig {
    /// Build config from variables captured at compile time.
    ///
    /// Optional:
    /// - `CHAT_WS_URL`: default `ws://localhost:8080/ws`
    /// - `STOCK_API_URL`: quote URL template containing `{code}`
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidEndpoint`] for a non-WebSocket URL.
    pub fn from_build_env() -> Result<Self, ChatError> {
        Self::from_parts(option_env!("CHAT_WS_URL"), option_env!("STOCK_API_URL"))
    }

    /// Build config from optional raw values, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::InvalidEndpoint`] for a non-WebSocket URL.
    pub fn from_parts(ws_url: Option<&str>, stock_url: Option<&str>) -> Result<Self, ChatError> {
        let ws_url = normalize_ws_url(ws_url.unwrap_or(DEFAULT_WS_URL))?;
        let stock_url = stock_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_owned);
        Ok(Self { ws_url, stock_url })
    }
}

/// Accept `ws://`/`wss://` as-is and map `http://`/`https://` onto them.
///
/// # Errors
///
/// Returns [`ChatError::InvalidEndpoint`] for any other scheme.
pub fn normalize_ws_url(raw: &str) -> Result<String, ChatError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("ws://") || trimmed.starts_with("wss://") {
        return Ok(trimmed.to_owned());
    }
    if let Some(rest) = trimmed.strip_prefix("http://") {
        return Ok(format!("ws://{rest}"));
    }
    if let Some(rest) = trimmed.strip_prefix("https://") {
        return Ok(format!("wss://{rest}"));
    }

    Err(ChatError::InvalidEndpoint(raw.to_owned()))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
