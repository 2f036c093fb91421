//! Action-driven state store for the admin UI.
//!
//! - [`Store`] owns a [`Reducer`] and applies actions to it.
//! - [`Dispatcher`] queues actions from background work back onto the UI thread.
//! - [`TaskHandle`] ties background work to the store's lifetime.

mod error;
mod spawn;
mod store;
mod task;

pub use error::{Error, Result};
pub use spawn::{MaybeSend, spawn_detached};
pub use store::{Dispatcher, Reducer, Store};
pub use task::{TaskHandle, TaskId};

pub use tokio_util::sync::CancellationToken;
