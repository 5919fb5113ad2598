use super::*;

#[test]
fn parse_input_recognizes_commands() {
    assert_eq!(parse_input("/nick alice"), Input::Nick("alice"));
    assert_eq!(parse_input("/join lobby"), Input::Join("lobby"));
    assert_eq!(parse_input("/leave"), Input::Leave);
    assert_eq!(parse_input("/quit\r"), Input::Quit);
}

#[test]
fn parse_input_bare_nick_clears_username() {
    assert_eq!(parse_input("/nick"), Input::Nick(""));
}

#[test]
fn parse_input_passes_other_lines_through() {
    assert_eq!(parse_input("hello room"), Input::Message("hello room"));
    assert_eq!(parse_input("/stock=AAPL.US"), Input::Message("/stock=AAPL.US"));
    assert_eq!(parse_input("/quit now"), Input::Message("/quit now"));
    assert_eq!(parse_input(""), Input::Message(""));
}

#[test]
fn status_line_tracks_connection_changes() {
    let (events_tx, _events_rx) = mpsc::unbounded_channel();
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");
    let _guard = runtime.enter();

    let mut session = Session::new(TokioConnector::new(events_tx), "ws://127.0.0.1:9/ws");
    let mut status = StatusLine::default();

    session.set_username("alice");
    session.set_room("lobby");
    status.report(&session);
    assert_eq!(status.url.as_deref(), Some("ws://127.0.0.1:9/ws?username=alice&room=lobby"));

    session.set_room("");
    status.report(&session);
    assert_eq!(status.url, None);
}
