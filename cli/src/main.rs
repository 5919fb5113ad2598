mod quote;
mod socket;

use clap::Parser;
use roomchat::config::{ChatConfig, DEFAULT_WS_URL};
use roomchat::error::ChatError;
use roomchat::net::socket::{Connector, SocketEvent};
use roomchat::net::types::ChatMessage;
use roomchat::state::session::Session;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::socket::TokioConnector;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Chat(#[from] ChatError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

#[derive(Parser, Debug)]
#[command(
    name = "roomchat-cli",
    about = "Join a chat room over WebSocket from the terminal",
    after_help = "Commands: /nick NAME, /join ROOM, /leave, /quit. Any other line is sent to the room."
)]
struct Cli {
    #[arg(long, env = "CHAT_WS_URL", default_value = DEFAULT_WS_URL)]
    url: String,

    #[arg(long, env = "CHAT_USERNAME")]
    username: Option<String>,

    #[arg(long, env = "CHAT_ROOM")]
    room: Option<String>,

    /// Quote URL template for `/stock=CODE`, with `{code}` as placeholder.
    #[arg(long, env = "STOCK_API_URL")]
    stock_url: Option<String>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// One line of user input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Nick(&'a str),
    Join(&'a str),
    Leave,
    Quit,
    Message(&'a str),
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::WARN })
        .init();

    let config = ChatConfig::from_parts(Some(&cli.url), cli.stock_url.as_deref())?;
    run(config, cli.username, cli.room).await
}

async fn run(config: ChatConfig, username: Option<String>, room: Option<String>) -> Result<(), CliError> {
    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<SocketEvent>();
    let (quotes_tx, mut quotes_rx) = mpsc::unbounded_channel::<ChatMessage>();
    let http = reqwest::Client::builder().build()?;

    let mut session = Session::new(TokioConnector::new(events_tx), config.ws_url);
    let mut status = StatusLine::default();
    let mut printed = 0_usize;

    if let Some(username) = username {
        session.set_username(username);
    }
    if let Some(room) = room {
        session.set_room(room);
    }
    status.report(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };
                match parse_input(&line) {
                    Input::Nick(name) => session.set_username(name),
                    Input::Join(room) => session.set_room(room),
                    Input::Leave => session.set_room(""),
                    Input::Quit => break,
                    Input::Message(text) => {
                        session.set_draft(text);
                        if session.send_message() {
                            if let Some(template) = config.stock_url.as_deref() {
                                quote::spawn_lookup(&http, template, session.room(), text, quotes_tx.clone());
                            }
                        } else if session.connected_url().is_none() && !text.is_empty() {
                            eprintln!("! not connected; set /nick and /join first");
                        }
                    }
                }
            }
            Some(event) = events_rx.recv() => session.handle_event(event),
            Some(message) = quotes_rx.recv() => session.push_local(message),
        }

        status.report(&session);
        for message in &session.messages()[printed..] {
            println!("{message}");
        }
        printed = session.messages().len();
    }

    session.disconnect();
    Ok(())
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (command, arg) = line.split_once(' ').unwrap_or((line, ""));
    match command {
        "/nick" => Input::Nick(arg.trim()),
        "/join" => Input::Join(arg.trim()),
        "/leave" if arg.is_empty() => Input::Leave,
        "/quit" if arg.is_empty() => Input::Quit,
        _ => Input::Message(line),
    }
}

/// Prints connection changes and new errors to stderr, once each.
#[derive(Debug, Default)]
struct StatusLine {
    url: Option<String>,
    error: Option<String>,
}

impl StatusLine {
    fn report<C: Connector>(&mut self, session: &Session<C>) {
        let url = session.connected_url().map(str::to_owned);
        if url != self.url {
            match &url {
                Some(url) => eprintln!("* joining {} as {} ({url})", session.room(), session.username()),
                None => eprintln!("* disconnected"),
            }
            self.url = url;
        }

        let error = session.last_error().map(str::to_owned);
        if error != self.error {
            if let Some(error) = &error {
                eprintln!("! {error}");
            }
            self.error = error;
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;
