//! Row selection for bulk actions.
//!
//! Selection is keyed by record id and survives page and filter changes. Only a bulk delete
//! clears it.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::record::RecordId;

/// How the header checkbox treats the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectAllPolicy {
    /// Checked iff every visible row is selected; toggling adds or removes only the
    /// visible rows and keeps selections made on other pages.
    #[default]
    PageScoped,
    /// Checked iff the selection has as many ids as the page has rows; toggling then
    /// clears the whole selection, otherwise the selection becomes exactly the visible rows.
    Legacy,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: BTreeSet<RecordId>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &RecordId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RecordId> {
        self.ids.iter()
    }

    /// Flips membership of `id`, returns whether it is selected afterwards.
    pub fn toggle(&mut self, id: RecordId) -> bool {
        if self.ids.remove(&id) {
            false
        } else {
            self.ids.insert(id);
            true
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// State of the header checkbox for the rows currently visible.
    pub fn header_checked(&self, visible: &[RecordId], policy: SelectAllPolicy) -> bool {
        match policy {
            SelectAllPolicy::PageScoped => {
                !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
            }
            SelectAllPolicy::Legacy => self.ids.len() == visible.len(),
        }
    }

    /// Applies a click on the header checkbox.
    pub fn toggle_visible(&mut self, visible: &[RecordId], policy: SelectAllPolicy) {
        let checked = self.header_checked(visible, policy);
        match (policy, checked) {
            (SelectAllPolicy::PageScoped, true) => {
                for id in visible {
                    self.ids.remove(id);
                }
            }
            (SelectAllPolicy::PageScoped, false) => {
                self.ids.extend(visible.iter().copied());
            }
            (SelectAllPolicy::Legacy, true) => self.ids.clear(),
            (SelectAllPolicy::Legacy, false) => {
                self.ids = visible.iter().copied().collect();
            }
        }
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a RecordId;
    type IntoIter = std::collections::btree_set::Iter<'a, RecordId>;

    fn into_iter(self) -> Self::IntoIter {
        self.ids.iter()
    }
}
