//! Chat view: username/room/message form plus the room's message list.
//!
//! The component owns one [`Session`] in a local signal. Typing into the
//! username or room field goes straight to the session, which replaces its
//! socket when either value changes. Unmounting disconnects.

#[cfg(test)]
#[path = "chat_view_test.rs"]
mod chat_view_test;

use leptos::prelude::*;

use crate::components::message_list::MessageList;
use crate::config::ChatConfig;
use crate::net::socket::Connector;
use crate::net::stock::{parse_stock_command, quote_url};
use crate::state::connection::ConnectionStatus;
use crate::state::session::Session;

#[cfg(feature = "csr")]
type ViewConnector = crate::net::socket::BrowserConnector;
#[cfg(not(feature = "csr"))]
type ViewConnector = crate::net::socket::OfflineConnector;

type SessionSignal = RwSignal<Session<ViewConnector>, LocalStorage>;

#[component]
pub fn ChatView(config: ChatConfig) -> impl IntoView {
    let ChatConfig { ws_url, stock_url } = config;

    #[cfg(feature = "csr")]
    let (connector, events) = {
        let (tx, rx) = futures::channel::mpsc::unbounded();
        (crate::net::socket::BrowserConnector::new(tx), rx)
    };
    #[cfg(not(feature = "csr"))]
    let connector = crate::net::socket::OfflineConnector;

    let session: SessionSignal = own_session(connector, ws_url);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(pump_socket_events(session, events));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = session.with_untracked(|s| s.draft().to_owned());
        let sent = session.try_update(Session::send_message).unwrap_or(false);
        if let (true, Some(template)) = (sent, stock_url.as_deref()) {
            request_quote(session, template, &text);
        }
    };

    let status = move || {
        session.with(|s| match (s.status(), s.last_error()) {
            (_, Some(err)) => format!("error: {err}"),
            (ConnectionStatus::Connected, None) => format!("connected to {} as {}", s.room(), s.username()),
            (ConnectionStatus::Disconnected, None) => "not connected".to_owned(),
        })
    };

    let message_count = Memo::new(move |_| session.with(|s| s.messages().len()));
    let entry = move |index: usize| session.with_untracked(|s| s.messages().get(index).cloned());

    view! {
        <div class="chat-view">
            <h1>"WebSocket Chat"</h1>
            <form class="chat-view__form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="Username"
                    prop:value=move || session.with(|s| s.username().to_owned())
                    on:input=move |ev| session.update(|s| s.set_username(event_target_value(&ev)))
                />
                <input
                    type="text"
                    placeholder="Room"
                    prop:value=move || session.with(|s| s.room().to_owned())
                    on:input=move |ev| session.update(|s| s.set_room(event_target_value(&ev)))
                />
                <input
                    type="text"
                    placeholder="Message"
                    prop:value=move || session.with(|s| s.draft().to_owned())
                    on:input=move |ev| session.update(|s| s.set_draft(event_target_value(&ev)))
                />
                <button type="submit">"Send"</button>
            </form>
            <p class="chat-view__status">{status}</p>
            <MessageList count=message_count entry=entry/>
        </div>
    }
}

/// Create the session signal for the current owner and disconnect it when
/// the owner is cleaned up.
fn own_session<C: Connector + 'static>(connector: C, ws_url: String) -> RwSignal<Session<C>, LocalStorage> {
    let session = RwSignal::new_local(Session::new(connector, ws_url));
    on_cleanup(move || {
        let _ = session.try_update_untracked(Session::disconnect);
    });
    session
}

/// Feed socket events into the session until the session is gone.
#[cfg(feature = "csr")]
async fn pump_socket_events(
    session: SessionSignal,
    mut events: futures::channel::mpsc::UnboundedReceiver<crate::net::socket::SocketEvent>,
) {
    use futures::StreamExt;

    while let Some(event) = events.next().await {
        if session.try_update(|s| s.handle_event(event)).is_none() {
            break;
        }
    }
}

/// Look up a `/stock=CODE` message and append the answer locally.
fn request_quote(session: SessionSignal, template: &str, text: &str) {
    let Some(code) = parse_stock_command(text) else {
        return;
    };
    let url = quote_url(template, code);

    #[cfg(feature = "csr")]
    {
        use crate::net::stock::{fetch_quote, quote_message};

        let code = code.to_owned();
        leptos::task::spawn_local(async move {
            match fetch_quote(&url, &code).await {
                Ok(line) => {
                    let _ = session.try_update(|s| s.push_local(quote_message(s.room(), line)));
                }
                Err(e) => log::warn!("stock quote for {code} failed: {e}"),
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        log::debug!("quote lookup skipped without a browser transport: {url}");
    }
}
