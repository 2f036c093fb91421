//! Domain logic of the admin user table.
//!
//! The UI only reads [`UserTableState`] and dispatches [`UserTableAction`]s; every state
//! transition, the members fetch and configuration live here.

mod config;
mod delete;
mod edit;
mod filter;
pub mod http;
mod loader;
mod pagination;
mod record;
mod selection;
mod table_state;

pub use config::{AppConfig, ConfigError, DEFAULT_MEMBERS_URL};
pub use delete::{DeleteSession, remove_by_id, remove_selected};
pub use edit::{
    AcceptAll, EditBuffer, EditField, EditSession, EditValidator, ValidationError, apply_edit,
};
pub use filter::filter_indices;
pub use loader::{LoadError, LoadMembersCommand, LoadResult, fetch_members};
pub use pagination::{PAGE_SIZE, PageButton, PageControls, page_range, page_slice, total_pages};
pub use record::{RecordId, UserRecord};
pub use selection::{SelectAllPolicy, SelectionSet};
pub use table_state::{LOAD_ERROR_MESSAGE, LoadStatus, UserTableAction, UserTableState};
