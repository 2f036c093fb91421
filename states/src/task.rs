//! Task handles for cooperative cancellation of background work.
//!
//! Every future spawned through [`crate::Store::spawn`] gets a [`TaskHandle`] wrapping a
//! `CancellationToken` from `tokio_util`. The store keeps the handles and cancels all of
//! them when it is dropped.
//!
//! ```ignore
//! let handle = store.spawn("load_members", |dispatcher, cancel| async move {
//!     tokio::select! {
//!         _ = cancel.cancelled() => {}
//!         users = fetch() => { let _ = dispatcher.send(Action::Loaded(users)); }
//!     }
//! })?;
//!
//! handle.cancel();
//! ```

use tokio_util::sync::CancellationToken;

/// Identifier of a spawned task: a static kind label plus a per-store generation counter.
///
/// Two spawns of the same kind share the label and differ in generation, which lets callers
/// tell a stale task from the latest one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    kind: &'static str,
    generation: u64,
}

impl TaskId {
    pub fn new(kind: &'static str, generation: u64) -> Self {
        Self { kind, generation }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    /// Higher values were spawned later.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned task.
///
/// Cancellation is cooperative: the task must await `cancelled()` or check
/// `is_cancelled()` before it publishes anything.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
