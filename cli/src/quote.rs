//! Stock quote lookups for `/stock=CODE` messages.

use roomchat::error::QuoteError;
use roomchat::net::stock::{parse_quote_csv, parse_stock_command, quote_message, quote_url};
use roomchat::net::types::ChatMessage;
use tokio::sync::mpsc;

async fn fetch_quote(client: &reqwest::Client, url: &str, code: &str) -> Result<String, QuoteError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| QuoteError::Http(e.to_string()))?;
    let status = response.status();
    if !status.is_success() {
        return Err(QuoteError::Http(format!("HTTP {}", status.as_u16())));
    }
    let body = response.text().await.map_err(|e| QuoteError::Http(e.to_string()))?;
    parse_quote_csv(code, &body)
}

/// Start a background lookup if `text` is a stock command.
///
/// The answer is delivered on `results` as a local chat entry for `room`.
/// Returns `false` when `text` is not a stock command.
pub fn spawn_lookup(
    client: &reqwest::Client,
    template: &str,
    room: &str,
    text: &str,
    results: mpsc::UnboundedSender<ChatMessage>,
) -> bool {
    let Some(code) = parse_stock_command(text) else {
        return false;
    };

    let client = client.clone();
    let url = quote_url(template, code);
    let code = code.to_owned();
    let room = room.to_owned();
    tokio::spawn(async move {
        match fetch_quote(&client, &url, &code).await {
            Ok(line) => {
                let _ = results.send(quote_message(&room, line));
            }
            Err(error) => tracing::warn!(%code, %error, "stock quote lookup failed"),
        }
    });
    true
}
