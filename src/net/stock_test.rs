use super::*;

const AAPL_CSV: &str = "Symbol,Date,Time,Open,High,Low,Close,Volume\r\nAAPL.US,2024-05-10,22:00:07,184.9,185.09,182.13,183.05,50759496\r\n";

// =============================================================
// parse_stock_command
// =============================================================

#[test]
fn parse_stock_command_extracts_code() {
    assert_eq!(parse_stock_command("/stock=AAPL.US"), Some("AAPL.US"));
}

#[test]
fn parse_stock_command_ignores_plain_text() {
    assert_eq!(parse_stock_command("hello"), None);
    assert_eq!(parse_stock_command("/stocks=AAPL.US"), None);
    assert_eq!(parse_stock_command("stock=AAPL.US"), None);
}

#[test]
fn parse_stock_command_requires_exactly_one_separator() {
    assert_eq!(parse_stock_command("/stock=A=B"), None);
    assert_eq!(parse_stock_command("/stock"), None);
}

#[test]
fn parse_stock_command_rejects_empty_code() {
    assert_eq!(parse_stock_command("/stock="), None);
}

// =============================================================
// quote_url
// =============================================================

#[test]
fn quote_url_fills_named_placeholder() {
    assert_eq!(
        quote_url("https://stooq.com/q/l/?s={code}&f=sd2t2ohlcv&h&e=csv", "AAPL.US"),
        "https://stooq.com/q/l/?s=AAPL.US&f=sd2t2ohlcv&h&e=csv"
    );
}

#[test]
fn quote_url_fills_printf_placeholder() {
    assert_eq!(quote_url("https://quotes.local/q?s=%s&e=csv", "msft.us"), "https://quotes.local/q?s=msft.us&e=csv");
}

// =============================================================
// parse_quote_csv
// =============================================================

#[test]
fn parse_quote_csv_formats_price_column() {
    let line = parse_quote_csv("AAPL.US", AAPL_CSV).expect("quote");
    assert_eq!(line, "AAPL.US quote is $185.09 per share");
}

#[test]
fn parse_quote_csv_reports_missing_data() {
    let body = "Symbol,Date,Time,Open,High,Low,Close,Volume\nINVALID_CODE,N/D,N/D,N/D,N/D,N/D,N/D,N/D\n";
    assert!(matches!(parse_quote_csv("INVALID_CODE", body), Err(QuoteError::Unavailable)));
}

#[test]
fn parse_quote_csv_requires_data_row() {
    let body = "Symbol,Date,Time,Open,High,Low,Close,Volume\n";
    assert!(matches!(parse_quote_csv("AAPL.US", body), Err(QuoteError::Malformed)));
}

#[test]
fn parse_quote_csv_requires_five_fields() {
    let body = "Symbol,Date\nAAPL.US,2024-05-10\n";
    assert!(matches!(parse_quote_csv("AAPL.US", body), Err(QuoteError::Malformed)));
}

#[test]
fn parse_quote_csv_keeps_columns_with_quoted_commas() {
    let body = "Symbol,Name,Date,Time,Open\nAAPL.US,\"Apple, Inc.\",2024-05-10,22:00,184.90\n";
    let line = parse_quote_csv("AAPL.US", body).expect("quote");
    assert_eq!(line, "AAPL.US quote is $184.90 per share");
}

#[test]
fn parse_quote_csv_skips_blank_lines() {
    let body = "\nSymbol,Date,Time,Open,High\n\nAAPL.US,2024-05-10,22:00,184.9,185.09\n";
    let line = parse_quote_csv("AAPL.US", body).expect("quote");
    assert_eq!(line, "AAPL.US quote is $185.09 per share");
}

#[test]
fn parse_quote_csv_rejects_non_numeric_price() {
    let body = "a,b,c,d,e\n1,2,3,4,cheap\n";
    assert!(matches!(parse_quote_csv("X", body), Err(QuoteError::Price(_))));
}

#[test]
fn quote_message_is_attributed_to_bot() {
    let msg = quote_message("lobby", "X quote is $1.00 per share".to_owned());
    assert_eq!(msg.username, STOCK_BOT_NAME);
    assert_eq!(msg.room, "lobby");
}
