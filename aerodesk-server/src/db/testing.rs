//! Scripted `Storage` double for unit tests
//!
//! Replies are consumed in order; every statement is recorded so tests can
//! assert on SQL text, bound parameters and call counts.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use aerodesk_core::RawStorageError;

use super::storage::{Row, Statement, Storage};

pub(crate) enum Reply {
    Rows(Vec<Row>),
    Affected(u64),
    Fail(RawStorageError),
}

#[derive(Default)]
pub(crate) struct ScriptedStorage {
    replies: Mutex<VecDeque<Reply>>,
    calls: Mutex<Vec<Statement>>,
}

impl ScriptedStorage {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reply(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub(crate) fn calls(&self) -> Vec<Statement> {
        self.calls.lock().unwrap().clone()
    }

    fn next(&self, statement: &Statement) -> Reply {
        self.calls.lock().unwrap().push(statement.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected statement: {}", statement.sql))
    }
}

#[async_trait]
impl Storage for ScriptedStorage {
    async fn execute(&self, statement: &Statement) -> Result<u64, RawStorageError> {
        match self.next(statement) {
            Reply::Affected(n) => Ok(n),
            Reply::Rows(rows) => Ok(rows.len() as u64),
            Reply::Fail(err) => Err(err),
        }
    }

    async fn query(&self, statement: &Statement) -> Result<Vec<Row>, RawStorageError> {
        match self.next(statement) {
            Reply::Rows(rows) => Ok(rows),
            Reply::Affected(_) => Ok(Vec::new()),
            Reply::Fail(err) => Err(err),
        }
    }
}
