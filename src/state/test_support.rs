//! Recording connector used by the state tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::ChatError;
use crate::net::socket::{ChatSocket, Connector, SocketId};

#[derive(Debug, Default)]
struct Journal {
    opened: Vec<String>,
    closed: Vec<String>,
    sent: Vec<String>,
}

/// Fake transport that records every socket operation.
#[derive(Clone, Debug, Default)]
pub struct RecordingConnector {
    journal: Rc<RefCell<Journal>>,
    refuse_open: Rc<Cell<bool>>,
    refuse_send: bool,
}

impl RecordingConnector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn refusing_open() -> Self {
        Self {
            refuse_open: Rc::new(Cell::new(true)),
            ..Self::default()
        }
    }

    /// Start or stop refusing opens; shared with every clone.
    pub fn set_refuse_open(&self, refuse: bool) {
        self.refuse_open.set(refuse);
    }

    pub fn refusing_send() -> Self {
        Self { refuse_send: true, ..Self::default() }
    }

    pub fn opened(&self) -> Vec<String> {
        self.journal.borrow().opened.clone()
    }

    pub fn closed(&self) -> Vec<String> {
        self.journal.borrow().closed.clone()
    }

    /// Raw frames handed to any socket.
    pub fn sent(&self) -> Vec<String> {
        self.journal.borrow().sent.clone()
    }

    /// Sockets opened and not yet closed.
    pub fn live(&self) -> usize {
        let journal = self.journal.borrow();
        journal.opened.len() - journal.closed.len()
    }
}

#[derive(Debug)]
pub struct RecordingSocket {
    url: String,
    journal: Rc<RefCell<Journal>>,
    refuse_send: bool,
}

impl Connector for RecordingConnector {
    type Socket = RecordingSocket;

    fn open(&mut self, _id: SocketId, url: &str) -> Result<RecordingSocket, ChatError> {
        if self.refuse_open.get() {
            return Err(ChatError::Connect("connection refused".to_owned()));
        }
        self.journal.borrow_mut().opened.push(url.to_owned());
        Ok(RecordingSocket {
            url: url.to_owned(),
            journal: Rc::clone(&self.journal),
            refuse_send: self.refuse_send,
        })
    }
}

impl ChatSocket for RecordingSocket {
    fn send_text(&mut self, text: String) -> Result<(), ChatError> {
        if self.refuse_send {
            return Err(ChatError::Send("socket is closing".to_owned()));
        }
        self.journal.borrow_mut().sent.push(text);
        Ok(())
    }

    fn close(&mut self) {
        self.journal.borrow_mut().closed.push(self.url.clone());
    }
}
