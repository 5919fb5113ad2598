//! Room URL construction.

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

/// Build the socket URL for one (username, room) pair.
///
/// Query values are percent-encoded. A base that already carries a query
/// string is extended rather than replaced.
pub fn room_url(base: &str, username: &str, room: &str) -> String {
    let separator = if base.contains('?') { '&' } else { '?' };
    format!(
        "{base}{separator}username={}&room={}",
        urlencoding::encode(username),
        urlencoding::encode(room)
    )
}
