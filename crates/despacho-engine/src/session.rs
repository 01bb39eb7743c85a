//! Session state: one loaded dataset plus the split cursor.

use chrono::NaiveDate;
use despacho_model::{FilingRecord, ListadoEntry};
use thiserror::Error;

use crate::distribute::{
    split_continuation, split_initial, ContinuationSplit, DistributeError, InitialSplit,
    PER_LIST_DEFAULT,
};
use crate::listado::{build_listados, ListadoError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Listado(#[from] ListadoError),
    #[error(transparent)]
    Distribute(#[from] DistributeError),
}

/// Cursor carried across split invocations. `consumed` counts raw
/// (pre-merge) listado rows; `last_assigned` is the anchor date recorded by
/// the latest bounded split.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitCursor {
    pub consumed: usize,
    pub last_assigned: Option<NaiveDate>,
}

/// Owns one loaded dataset and its distribution cursor.
///
/// Loading a new file replaces the whole session, which implicitly resets
/// the cursor; there is no cross-dataset migration.
#[derive(Debug, Clone)]
pub struct DistributionSession {
    records: Vec<FilingRecord>,
    cursor: SplitCursor,
}

impl DistributionSession {
    pub fn new(records: Vec<FilingRecord>) -> Self {
        Self {
            records,
            cursor: SplitCursor::default(),
        }
    }

    pub fn records(&self) -> &[FilingRecord] {
        &self.records
    }

    pub fn cursor(&self) -> SplitCursor {
        self.cursor
    }

    /// Roll the cursor back to a previously observed value. For callers
    /// whose export fails after the split, so the session behaves as if the
    /// operation never ran.
    pub fn restore_cursor(&mut self, cursor: SplitCursor) {
        self.cursor = cursor;
    }

    /// Project the whole dataset into listado entries against `today`.
    pub fn listados(&self, today: NaiveDate) -> Result<Vec<ListadoEntry>, ListadoError> {
        build_listados(&self.records, today)
    }

    /// Bounded first-N split. Records how many raw rows were consumed and
    /// the latest received date among them (falling back to `today`) so a
    /// later continuation picks up exactly where this left off.
    pub fn split_initial(
        &mut self,
        recipients: usize,
        today: NaiveDate,
    ) -> Result<InitialSplit, SessionError> {
        let entries = self.listados(today)?;
        let split = split_initial(&entries, recipients, PER_LIST_DEFAULT)?;
        self.cursor.consumed = split.consumed;
        self.cursor.last_assigned = Some(split.last_received.unwrap_or(today));
        Ok(split)
    }

    /// Continuation split resuming at the cursor. The start date stays an
    /// explicit caller input; the recorded `last_assigned` date is only a
    /// hint for the caller's UI, never consumed here.
    pub fn split_continuation(
        &mut self,
        start_date: NaiveDate,
        lists: usize,
        today: NaiveDate,
    ) -> Result<ContinuationSplit, SessionError> {
        let entries = self.listados(today)?;
        let split = split_continuation(
            &entries,
            self.cursor.consumed,
            start_date,
            lists,
            PER_LIST_DEFAULT,
            today,
        )?;
        self.cursor.consumed += split.consumed;
        Ok(split)
    }
}
