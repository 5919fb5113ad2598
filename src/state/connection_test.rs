use super::*;
use crate::state::test_support::RecordingConnector;

const URL: &str = "ws://localhost:8080/ws?username=alice&room=lobby";

#[test]
fn open_records_url() {
    let mut connector = RecordingConnector::new();
    let conn = Connection::open(&mut connector, SocketId(7), URL.to_owned()).expect("open");
    assert_eq!(conn.url(), URL);
    assert_eq!(conn.id(), SocketId(7));
    assert_eq!(connector.opened(), vec![URL.to_owned()]);
    assert!(connector.closed().is_empty());
}

#[test]
fn drop_closes_socket_once() {
    let mut connector = RecordingConnector::new();
    let conn = Connection::open(&mut connector, SocketId(7), URL.to_owned()).expect("open");
    drop(conn);
    assert_eq!(connector.closed(), vec![URL.to_owned()]);
    assert_eq!(connector.live(), 0);
}

#[test]
fn open_failure_leaves_nothing_to_close() {
    let mut connector = RecordingConnector::refusing_open();
    let result = Connection::open(&mut connector, SocketId(7), URL.to_owned());
    assert!(matches!(result, Err(ChatError::Connect(_))));
    assert!(connector.closed().is_empty());
}

#[test]
fn send_forwards_frame() {
    let mut connector = RecordingConnector::new();
    let mut conn = Connection::open(&mut connector, SocketId(7), URL.to_owned()).expect("open");
    conn.send("{}".to_owned()).expect("send");
    assert_eq!(connector.sent(), vec!["{}".to_owned()]);
}

#[test]
fn status_defaults_to_disconnected() {
    assert_eq!(ConnectionStatus::default(), ConnectionStatus::Disconnected);
}
