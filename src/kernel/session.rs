use rustc_hash::FxHashMap;
use std::fmt;

use super::rich_text::RichText;

pub const MAIN_SESSION: &str = "main";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn main() -> Self {
        Self(MAIN_SESSION.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_main(&self) -> bool {
        self.0 == MAIN_SESSION
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Command,
    Output,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputEntry {
    pub kind: EntryKind,
    pub content: RichText,
}

impl OutputEntry {
    pub fn new(kind: EntryKind, content: RichText) -> Self {
        Self { kind, content }
    }

    pub fn command(raw: &str) -> Self {
        Self::new(
            EntryKind::Command,
            RichText::plain(&format!("{} {raw}", super::content::PROMPT)),
        )
    }

    pub fn output(content: RichText) -> Self {
        Self::new(EntryKind::Output, content)
    }

    pub fn error(message: &str) -> Self {
        Self::new(EntryKind::Error, RichText::plain(message))
    }

    pub fn info(message: &str) -> Self {
        Self::new(EntryKind::Info, RichText::plain(message))
    }
}

#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub outputs: Vec<OutputEntry>,
    pub input: String,
    pub history: Vec<String>,
    /// `None` while not browsing history; `Some(0)` is the most recent command.
    pub history_cursor: Option<usize>,
}

impl Session {
    fn new(id: SessionId, welcome: RichText) -> Self {
        Self {
            id,
            outputs: vec![OutputEntry::output(welcome)],
            input: String::new(),
            history: Vec::new(),
            history_cursor: None,
        }
    }

    /// True when the log holds nothing but the synthetic welcome entry.
    pub fn shows_only_welcome(&self) -> bool {
        self.outputs.len() == 1 && self.outputs[0].kind == EntryKind::Output
    }

    pub fn push_history(&mut self, raw: &str) {
        self.history.push(raw.to_string());
        self.history_cursor = None;
    }

    /// Steps toward older commands. Returns false when already at the oldest entry.
    pub fn history_up(&mut self) -> bool {
        let next = match self.history_cursor {
            None => 0,
            Some(cursor) => cursor + 1,
        };
        if next >= self.history.len() {
            return false;
        }
        self.history_cursor = Some(next);
        self.input = self.history[self.history.len() - 1 - next].clone();
        true
    }

    /// Steps toward newer commands; leaving the newest entry clears the input.
    pub fn history_down(&mut self) -> bool {
        match self.history_cursor {
            None => false,
            Some(0) => {
                self.history_cursor = None;
                self.input.clear();
                true
            }
            Some(cursor) => {
                let next = cursor - 1;
                self.history_cursor = Some(next);
                self.input = self.history[self.history.len() - 1 - next].clone();
                true
            }
        }
    }
}

/// Partial update applied by [`SessionRegistry::update`].
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub input: Option<String>,
    pub history: Option<Vec<String>>,
    pub history_cursor: Option<Option<usize>>,
    pub outputs: Option<Vec<OutputEntry>>,
}

#[derive(Debug)]
pub struct SessionRegistry {
    sessions: FxHashMap<SessionId, Session>,
    next_serial: u64,
}

impl SessionRegistry {
    /// Registry holding only the default `main` session.
    pub fn new(welcome: RichText) -> Self {
        let mut sessions = FxHashMap::default();
        let main = SessionId::main();
        sessions.insert(main.clone(), Session::new(main, welcome));
        Self {
            sessions,
            next_serial: 1,
        }
    }

    pub fn create_session(&mut self, welcome: RichText) -> SessionId {
        let id = loop {
            let candidate = SessionId::new(format!("terminal-{}", self.next_serial));
            self.next_serial += 1;
            if !self.sessions.contains_key(&candidate) {
                break candidate;
            }
        };
        self.sessions
            .insert(id.clone(), Session::new(id.clone(), welcome));
        tracing::debug!(session = %id, "session created");
        id
    }

    pub fn get(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.get(id)
    }

    pub fn get_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.get_mut(id)
    }

    pub fn contains(&self, id: &SessionId) -> bool {
        self.sessions.contains_key(id)
    }

    /// Merges `patch` into the session. Unknown ids are ignored.
    pub fn update(&mut self, id: &SessionId, patch: SessionPatch) {
        let Some(session) = self.sessions.get_mut(id) else {
            tracing::debug!(session = %id, "update for unknown session ignored");
            return;
        };
        if let Some(input) = patch.input {
            session.input = input;
        }
        if let Some(history) = patch.history {
            session.history = history;
        }
        if let Some(cursor) = patch.history_cursor {
            session.history_cursor = cursor;
        }
        if let Some(outputs) = patch.outputs {
            session.outputs = outputs;
        }
        if session
            .history_cursor
            .is_some_and(|cursor| cursor >= session.history.len())
        {
            session.history_cursor = None;
        }
    }

    pub fn remove(&mut self, id: &SessionId) -> Option<Session> {
        let removed = self.sessions.remove(id);
        if removed.is_some() {
            tracing::debug!(session = %id, "session removed");
        }
        removed
    }

    pub fn append_output(&mut self, id: &SessionId, entry: OutputEntry) {
        if let Some(session) = self.sessions.get_mut(id) {
            session.outputs.push(entry);
        }
    }

    /// Resets the log to a single, freshly generated welcome entry.
    pub fn clear(&mut self, id: &SessionId, welcome: RichText) {
        if let Some(session) = self.sessions.get_mut(id) {
            session.outputs.clear();
            session.outputs.push(OutputEntry::output(welcome));
        }
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SessionId> {
        self.sessions.keys()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Session> {
        self.sessions.values_mut()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
