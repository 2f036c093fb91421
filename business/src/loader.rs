//! One-shot load of the members resource.

use adminui_states::{CancellationToken, Dispatcher, Store, TaskHandle};
use log::{debug, error, info};
use thiserror::Error;

use crate::http::{Client, HttpError};
use crate::record::UserRecord;
use crate::table_state::{LoadStatus, UserTableAction, UserTableState};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("request failed: {0}")]
    Transport(#[from] HttpError),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("malformed members payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type LoadResult<T> = Result<T, LoadError>;

/// GETs `url` and decodes the JSON array of members.
pub async fn fetch_members(url: &str) -> LoadResult<Vec<UserRecord>> {
    let request = Client::get(url).header("Accept", "application/json");
    debug!("GET {}", request.url());
    let response = request.send().await?;

    if !response.is_success() {
        return Err(LoadError::Status(response.status));
    }

    Ok(response.json()?)
}

/// Starts the members fetch as a task owned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadMembersCommand {
    url: String,
}

impl LoadMembersCommand {
    pub const TASK_KIND: &'static str = "load_members";

    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Spawns the fetch unless a load already started.
    ///
    /// Returns `Ok(None)` when the state is past [`LoadStatus::Idle`]. The result arrives as
    /// [`UserTableAction::Loaded`] or [`UserTableAction::LoadFailed`] on a later
    /// `Store::sync`; nothing is dispatched once the task is cancelled.
    pub fn spawn(
        self,
        store: &mut Store<UserTableState>,
    ) -> adminui_states::Result<Option<TaskHandle>> {
        if store.state().load_status() != LoadStatus::Idle {
            debug!("LoadMembersCommand: load already started, skipping");
            return Ok(None);
        }

        let url = self.url;
        let handle = store.spawn(Self::TASK_KIND, move |dispatch, cancel| {
            run_load(url, dispatch, cancel)
        })?;
        store.dispatch(UserTableAction::LoadStarted);
        Ok(Some(handle))
    }
}

async fn run_load(url: String, dispatch: Dispatcher<UserTableAction>, cancel: CancellationToken) {
    info!("LoadMembersCommand: fetching {url}");

    let result = tokio::select! {
        _ = cancel.cancelled() => {
            debug!("LoadMembersCommand: cancelled");
            return;
        }
        result = fetch_members(&url) => result,
    };

    if cancel.is_cancelled() {
        debug!("LoadMembersCommand: cancelled after fetch completed");
        return;
    }

    let action = match result {
        Ok(records) => {
            info!("LoadMembersCommand: fetched {} members", records.len());
            UserTableAction::Loaded(records)
        }
        Err(err) => {
            error!("LoadMembersCommand: {err}");
            UserTableAction::LoadFailed
        }
    };

    if let Err(err) = dispatch.send(action) {
        debug!("LoadMembersCommand: result dropped: {err}");
    }
}
