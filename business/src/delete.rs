//! Removal of records, one at a time (with confirmation) or by selection.

use crate::record::{RecordId, UserRecord};
use crate::selection::SelectionSet;

/// Confirmation dialog state for deleting one record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteSession {
    #[default]
    Closed,
    Open(UserRecord),
}

impl DeleteSession {
    pub fn open(record: &UserRecord) -> Self {
        Self::Open(record.clone())
    }

    pub fn target(&self) -> Option<&UserRecord> {
        match self {
            Self::Open(record) => Some(record),
            Self::Closed => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    pub fn cancel(&mut self) {
        *self = Self::Closed;
    }

    /// Closes the session and yields the id to remove.
    pub fn confirm(&mut self) -> Option<RecordId> {
        match std::mem::take(self) {
            Self::Open(record) => Some(record.id),
            Self::Closed => None,
        }
    }
}

/// Removes the record with `id`. Returns how many records were removed.
pub fn remove_by_id(records: &mut Vec<UserRecord>, id: RecordId) -> usize {
    let before = records.len();
    records.retain(|record| record.id != id);
    before - records.len()
}

/// Removes every selected record and clears the selection.
pub fn remove_selected(records: &mut Vec<UserRecord>, selection: &mut SelectionSet) -> usize {
    let before = records.len();
    records.retain(|record| !selection.contains(&record.id));
    selection.clear();
    before - records.len()
}
