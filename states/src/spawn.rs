//! Platform split for running a detached future.
//!
//! - native: the future runs on the ambient Tokio runtime (the binary enters one in `main`,
//!   tests get one from `#[tokio::test]`).
//! - wasm32: the future runs on the JS event loop through `spawn_local`, so it does not need
//!   to be `Send`.

use std::future::Future;

use crate::error::{Error, Result};

/// `Send` on native targets, no bound on wasm32.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}

#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}

/// `Send` on native targets, no bound on wasm32.
#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}

#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

/// Spawns `future` detached.
///
/// Fails on native when called outside a Tokio runtime.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_detached<F>(context: &'static str, future: F) -> Result<()>
where
    F: Future<Output = ()> + MaybeSend + 'static,
{
    let handle =
        tokio::runtime::Handle::try_current().map_err(|_| Error::no_runtime(context))?;
    drop(handle.spawn(future));
    Ok(())
}

/// Spawns `future` detached.
#[cfg(target_arch = "wasm32")]
pub fn spawn_detached<F>(_context: &'static str, future: F) -> Result<()>
where
    F: Future<Output = ()> + MaybeSend + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
    Ok(())
}
