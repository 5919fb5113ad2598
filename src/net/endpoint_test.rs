use super::*;

#[test]
fn room_url_appends_username_and_room() {
    assert_eq!(
        room_url("ws://localhost:8080/ws", "alice", "lobby"),
        "ws://localhost:8080/ws?username=alice&room=lobby"
    );
}

#[test]
fn room_url_encodes_reserved_characters() {
    assert_eq!(
        room_url("ws://localhost:8080/ws", "a&b", "room one"),
        "ws://localhost:8080/ws?username=a%26b&room=room%20one"
    );
}

#[test]
fn room_url_extends_existing_query() {
    assert_eq!(
        room_url("wss://chat.example/ws?v=2", "alice", "lobby"),
        "wss://chat.example/ws?v=2&username=alice&room=lobby"
    );
}
