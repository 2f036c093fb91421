//! Application state of the user table.
//!
//! Everything the view shows is derived from [`UserTableState`], and the only way to change
//! it is a [`UserTableAction`] applied through [`Reducer::reduce`]. The UI owns the state
//! inside an `adminui_states::Store`.
//!
//! The filtered view is cached as indices into the base list and recomputed whenever the
//! search text or the base list changes; every recompute moves back to page 1.

use std::fmt::{Debug, Formatter};

use adminui_states::Reducer;
use log::{debug, info, warn};

use crate::delete::{DeleteSession, remove_by_id, remove_selected};
use crate::edit::{AcceptAll, EditField, EditSession, EditValidator, apply_edit};
use crate::filter::filter_indices;
use crate::pagination::{PAGE_SIZE, PageControls, page_slice, total_pages};
use crate::record::{RecordId, UserRecord};
use crate::selection::{SelectAllPolicy, SelectionSet};

/// Message shown when the members resource could not be loaded.
pub const LOAD_ERROR_MESSAGE: &str = "Error fetching user data. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserTableAction {
    LoadStarted,
    Loaded(Vec<UserRecord>),
    LoadFailed,
    SetSearch(String),
    GoToPage(usize),
    ToggleRow(RecordId),
    ToggleVisibleRows,
    DeleteSelected,
    OpenEdit(RecordId),
    EditField(EditField, String),
    SaveEdit,
    CancelEdit,
    OpenDelete(RecordId),
    ConfirmDelete,
    CancelDelete,
}

pub struct UserTableState {
    records: Vec<UserRecord>,
    search: String,
    filtered: Vec<usize>,
    current_page: usize,
    selection: SelectionSet,
    select_all_policy: SelectAllPolicy,
    edit: EditSession,
    delete: DeleteSession,
    load: LoadStatus,
    validator: Box<dyn EditValidator>,
}

impl Debug for UserTableState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserTableState")
            .field("records", &self.records.len())
            .field("search", &self.search)
            .field("filtered", &self.filtered.len())
            .field("current_page", &self.current_page)
            .field("selection", &self.selection)
            .field("select_all_policy", &self.select_all_policy)
            .field("edit", &self.edit)
            .field("delete", &self.delete)
            .field("load", &self.load)
            .finish_non_exhaustive()
    }
}

impl Default for UserTableState {
    fn default() -> Self {
        Self::new(SelectAllPolicy::default())
    }
}

impl UserTableState {
    pub fn new(select_all_policy: SelectAllPolicy) -> Self {
        Self {
            records: Vec::new(),
            search: String::new(),
            filtered: Vec::new(),
            current_page: 1,
            selection: SelectionSet::new(),
            select_all_policy,
            edit: EditSession::Closed,
            delete: DeleteSession::Closed,
            load: LoadStatus::Idle,
            validator: Box::new(AcceptAll),
        }
    }

    /// State already holding `records`, as if the load had succeeded.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        let mut state = Self::default();
        state.reduce(UserTableAction::Loaded(records));
        state
    }

    pub fn with_validator(mut self, validator: impl EditValidator + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn records(&self) -> &[UserRecord] {
        &self.records
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn filtered(&self) -> impl Iterator<Item = &UserRecord> {
        self.filtered.iter().map(|&index| &self.records[index])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), PAGE_SIZE)
    }

    /// Records on the current page, empty when the page is out of range.
    pub fn visible(&self) -> Vec<&UserRecord> {
        page_slice(&self.filtered, self.current_page, PAGE_SIZE)
            .iter()
            .map(|&index| &self.records[index])
            .collect()
    }

    pub fn visible_ids(&self) -> Vec<RecordId> {
        self.visible().into_iter().map(|record| record.id).collect()
    }

    pub fn page_controls(&self) -> PageControls {
        PageControls::new(self.current_page, self.total_pages())
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_selected(&self, id: &RecordId) -> bool {
        self.selection.contains(id)
    }

    pub fn select_all_policy(&self) -> SelectAllPolicy {
        self.select_all_policy
    }

    pub fn header_checked(&self) -> bool {
        self.selection
            .header_checked(&self.visible_ids(), self.select_all_policy)
    }

    pub fn edit_session(&self) -> &EditSession {
        &self.edit
    }

    pub fn delete_session(&self) -> &DeleteSession {
        &self.delete
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.load == LoadStatus::Failed).then_some(LOAD_ERROR_MESSAGE)
    }

    /// True while a modal blocks the rest of the page.
    pub fn is_modal_open(&self) -> bool {
        self.edit.is_open() || self.delete.is_open()
    }

    fn find(&self, id: RecordId) -> Option<&UserRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    fn refresh_view(&mut self) {
        self.filtered = filter_indices(&self.records, &self.search);
        self.current_page = 1;
    }
}

impl Reducer for UserTableState {
    type Action = UserTableAction;

    fn reduce(&mut self, action: Self::Action) {
        match action {
            UserTableAction::LoadStarted => {
                self.load = LoadStatus::Loading;
            }
            UserTableAction::Loaded(records) => {
                if self.load == LoadStatus::Loaded {
                    warn!("UserTableState: ignoring second load of {} records", records.len());
                    return;
                }
                info!("UserTableState: loaded {} records", records.len());
                self.records = records;
                self.load = LoadStatus::Loaded;
                self.refresh_view();
            }
            UserTableAction::LoadFailed => {
                self.records.clear();
                self.load = LoadStatus::Failed;
                self.refresh_view();
            }
            UserTableAction::SetSearch(search) => {
                self.search = search;
                self.refresh_view();
            }
            UserTableAction::GoToPage(page) => {
                self.current_page = page;
            }
            UserTableAction::ToggleRow(id) => {
                self.selection.toggle(id);
            }
            UserTableAction::ToggleVisibleRows => {
                let visible = self.visible_ids();
                self.selection
                    .toggle_visible(&visible, self.select_all_policy);
            }
            UserTableAction::DeleteSelected => {
                let removed = remove_selected(&mut self.records, &mut self.selection);
                debug!("UserTableState: bulk delete removed {removed} records");
                self.refresh_view();
            }
            UserTableAction::OpenEdit(id) => match self.find(id).map(EditSession::open) {
                Some(session) => self.edit = session,
                None => warn!("UserTableState: edit requested for unknown id {id}"),
            },
            UserTableAction::EditField(field, value) => {
                self.edit.set_field(field, value);
            }
            UserTableAction::SaveEdit => {
                if let Some(buffer) = self.edit.save(self.validator.as_ref()) {
                    if apply_edit(&mut self.records, &buffer) {
                        debug!("UserTableState: saved edit of {}", buffer.id());
                        self.refresh_view();
                    } else {
                        warn!("UserTableState: edited id {} no longer exists", buffer.id());
                    }
                }
            }
            UserTableAction::CancelEdit => {
                self.edit.cancel();
            }
            UserTableAction::OpenDelete(id) => match self.find(id).map(DeleteSession::open) {
                Some(session) => self.delete = session,
                None => warn!("UserTableState: delete requested for unknown id {id}"),
            },
            UserTableAction::ConfirmDelete => {
                if let Some(id) = self.delete.confirm() {
                    let removed = remove_by_id(&mut self.records, id);
                    debug!("UserTableState: deleted {id} ({removed} removed)");
                    self.refresh_view();
                }
            }
            UserTableAction::CancelDelete => {
                self.delete.cancel();
            }
        }
    }
}
