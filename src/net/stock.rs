//! `/stock=CODE` chat command support.
//!
//! The command text is still relayed to the room like any other message.
//! Front ends that have a quote service configured also look the code up
//! and append the answer locally, attributed to [`STOCK_BOT_NAME`].

#[cfg(test)]
#[path = "stock_test.rs"]
mod stock_test;

use crate::error::QuoteError;
use crate::net::types::ChatMessage;

pub const STOCK_BOT_NAME: &str = "stockbot";

/// Column holding the price in the quote CSV body.
const PRICE_COLUMN: usize = 4;

/// Extract the stock code from a `/stock=CODE` message.
pub fn parse_stock_command(text: &str) -> Option<&str> {
    let mut parts = text.split('=');
    let (Some("/stock"), Some(code), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };
    if code.is_empty() {
        return None;
    }
    Some(code)
}

/// Fill the code into a quote URL template.
///
/// `{code}` is the preferred placeholder; `%s` is accepted for templates
/// written for printf-style servers.
pub fn quote_url(template: &str, code: &str) -> String {
    let encoded = urlencoding::encode(code);
    if template.contains("{code}") {
        template.replace("{code}", &encoded)
    } else {
        template.replacen("%s", &encoded, 1)
    }
}

/// Turn a quote CSV body into the chat line announced for `code`.
///
/// The first record is the header; the price is read from the first data
/// record. Quoted fields may contain commas.
///
/// # Errors
///
/// - [`QuoteError::Malformed`] without a data row of at least five fields
/// - [`QuoteError::Csv`] when the body is not valid CSV
/// - [`QuoteError::Unavailable`] when the service reports `N/D`
/// - [`QuoteError::Price`] when the price field is not a number
pub fn parse_quote_csv(code: &str, body: &str) -> Result<String, QuoteError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(body.as_bytes());
    let Some(row) = reader.records().next() else {
        return Err(QuoteError::Malformed);
    };
    let row = row?;
    let Some(raw_price) = row.get(PRICE_COLUMN) else {
        return Err(QuoteError::Malformed);
    };
    if raw_price == "N/D" {
        return Err(QuoteError::Unavailable);
    }
    let price = raw_price.parse::<f64>()?;
    Ok(format!("{code} quote is ${price:.2} per share"))
}

/// Fetch a quote CSV from `url` and format it for `code`.
///
/// # Errors
///
/// Returns [`QuoteError::Http`] for transport failures or non-success
/// statuses, otherwise whatever [`parse_quote_csv`] reports.
#[cfg(feature = "csr")]
pub async fn fetch_quote(url: &str, code: &str) -> Result<String, QuoteError> {
    let response = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| QuoteError::Http(e.to_string()))?;
    if !response.ok() {
        return Err(QuoteError::Http(format!("HTTP {}", response.status())));
    }
    let body = response.text().await.map_err(|e| QuoteError::Http(e.to_string()))?;
    parse_quote_csv(code, &body)
}

/// Wrap a quote line as a local chat entry for `room`.
pub fn quote_message(room: &str, text: String) -> ChatMessage {
    ChatMessage {
        username: STOCK_BOT_NAME.to_owned(),
        text,
        room: room.to_owned(),
    }
}
