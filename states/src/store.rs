//! Single-owner state store driven by explicit actions.
//!
//! The store owns one [`Reducer`] value. UI code reads it through [`Store::state`] and
//! changes it only through actions:
//! - synchronously with [`Store::dispatch`] (input events on the UI thread)
//! - asynchronously through a cloned [`Dispatcher`]; queued actions are applied on the next
//!   [`Store::sync`], which the app calls once per frame before rendering.

use std::fmt::{Debug, Formatter};
use std::future::Future;
use std::sync::Arc;

use flume::{Receiver, Sender};
use log::trace;
use tokio_util::sync::CancellationToken;

use crate::error::{Error, Result};
use crate::spawn::{MaybeSend, spawn_detached};
use crate::task::{TaskHandle, TaskId};

/// State that changes only by applying actions.
pub trait Reducer: 'static {
    type Action: Send + 'static;

    fn reduce(&mut self, action: Self::Action);
}

type Notify = Arc<dyn Fn() + Send + Sync>;

/// Cloneable, `Send` handle that queues actions into a [`Store`].
pub struct Dispatcher<A> {
    send: Sender<A>,
    notify: Option<Notify>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            send: self.send.clone(),
            notify: self.notify.clone(),
        }
    }
}

impl<A> Debug for Dispatcher<A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("queued", &self.send.len())
            .field("notify", &self.notify.is_some())
            .finish()
    }
}

impl<A> Dispatcher<A> {
    /// Queues `action` and wakes the owner (repaint request in the UI).
    ///
    /// Fails once the owning store has been dropped.
    pub fn send(&self, action: A) -> Result<()> {
        self.send
            .send(action)
            .map_err(|_| Error::store_dropped(std::any::type_name::<A>()))?;
        if let Some(notify) = &self.notify {
            notify();
        }
        Ok(())
    }
}

pub struct Store<R: Reducer> {
    state: R,
    send: Sender<R::Action>,
    recv: Receiver<R::Action>,
    notify: Option<Notify>,
    tasks: Vec<TaskHandle>,
    generation: u64,
}

impl<R: Reducer + Debug> Debug for Store<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store")
            .field("state", &self.state)
            .field("queued", &self.recv.len())
            .field("tasks", &self.tasks)
            .finish()
    }
}

impl<R: Reducer> Store<R> {
    pub fn new(state: R) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            state,
            send,
            recv,
            notify: None,
            tasks: Vec::new(),
            generation: 0,
        }
    }

    pub fn state(&self) -> &R {
        &self.state
    }

    /// Applies `action` immediately.
    pub fn dispatch(&mut self, action: R::Action) {
        self.state.reduce(action);
    }

    /// Installs a callback run after every action queued through a [`Dispatcher`].
    ///
    /// Only dispatchers created afterwards carry it.
    pub fn set_notify(&mut self, notify: impl Fn() + Send + Sync + 'static) {
        self.notify = Some(Arc::new(notify));
    }

    pub fn dispatcher(&self) -> Dispatcher<R::Action> {
        Dispatcher {
            send: self.send.clone(),
            notify: self.notify.clone(),
        }
    }

    /// Applies every queued action in arrival order, returns how many were applied.
    pub fn sync(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(action) = self.recv.try_recv() {
            self.state.reduce(action);
            applied += 1;
        }
        if applied > 0 {
            trace!("Store: applied {applied} queued actions");
        }
        applied
    }

    /// Spawns background work bound to this store's lifetime.
    ///
    /// `task` receives a dispatcher and the cancellation token of the new task. The token is
    /// cancelled by [`Store::cancel_all`] and when the store is dropped.
    pub fn spawn<F, Fut>(&mut self, kind: &'static str, task: F) -> Result<TaskHandle>
    where
        F: FnOnce(Dispatcher<R::Action>, CancellationToken) -> Fut,
        Fut: Future<Output = ()> + MaybeSend + 'static,
    {
        self.generation += 1;
        let handle = TaskHandle::new(TaskId::new(kind, self.generation), CancellationToken::new());

        let future = task(self.dispatcher(), handle.cancellation_token());
        spawn_detached(kind, future)?;

        trace!("Store: spawned {:?}", handle.id());
        self.tasks.push(handle.clone());
        Ok(handle)
    }

    pub fn tasks(&self) -> &[TaskHandle] {
        &self.tasks
    }

    pub fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.cancel();
        }
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct Counter {
        value: i64,
    }

    enum CounterAction {
        Add(i64),
        Reset,
    }

    impl Reducer for Counter {
        type Action = CounterAction;

        fn reduce(&mut self, action: Self::Action) {
            match action {
                CounterAction::Add(n) => self.value += n,
                CounterAction::Reset => self.value = 0,
            }
        }
    }

    #[test]
    fn dispatch_applies_immediately() {
        let mut store = Store::new(Counter::default());
        store.dispatch(CounterAction::Add(2));
        store.dispatch(CounterAction::Add(3));

        assert_eq!(store.state().value, 5);
    }

    #[test]
    fn queued_actions_wait_for_sync() {
        let mut store = Store::new(Counter::default());
        let dispatcher = store.dispatcher();

        dispatcher.send(CounterAction::Add(4)).expect("store alive");
        dispatcher.send(CounterAction::Reset).expect("store alive");
        dispatcher.send(CounterAction::Add(1)).expect("store alive");
        assert_eq!(store.state().value, 0);

        assert_eq!(store.sync(), 3);
        assert_eq!(store.state().value, 1);
        assert_eq!(store.sync(), 0);
    }

    #[test]
    fn send_after_drop_fails() {
        let store = Store::new(Counter::default());
        let dispatcher = store.dispatcher();
        drop(store);

        let result = dispatcher.send(CounterAction::Add(1));
        assert!(matches!(result, Err(Error::StoreDropped { .. })));
    }

    #[test]
    fn notify_runs_per_queued_action() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut store = Store::new(Counter::default());
        let counted = Arc::clone(&calls);
        store.set_notify(move || {
            counted.fetch_add(1, Ordering::SeqCst);
        });

        let dispatcher = store.dispatcher();
        dispatcher.send(CounterAction::Add(1)).expect("store alive");
        dispatcher.send(CounterAction::Add(1)).expect("store alive");

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn spawned_task_dispatches_into_store() {
        let mut store = Store::new(Counter::default());
        let (done_tx, done_rx) = flume::bounded::<()>(1);

        let handle = store
            .spawn("add", move |dispatcher, _cancel| async move {
                dispatcher.send(CounterAction::Add(5)).expect("store alive");
                let _ = done_tx.send_async(()).await;
            })
            .expect("runtime is available");

        done_rx.recv_async().await.expect("task finished");
        assert_eq!(handle.id().kind(), "add");
        assert_eq!(store.sync(), 1);
        assert_eq!(store.state().value, 5);
    }

    #[tokio::test]
    async fn generations_increase_per_spawn() {
        let mut store = Store::new(Counter::default());
        let first = store
            .spawn("noop", |_, _| async {})
            .expect("runtime is available");
        let second = store
            .spawn("noop", |_, _| async {})
            .expect("runtime is available");

        assert!(second.id().generation() > first.id().generation());
        assert_eq!(store.tasks().len(), 2);
    }

    #[tokio::test]
    async fn dropping_store_cancels_tasks() {
        let mut store = Store::new(Counter::default());
        let handle = store
            .spawn("wait", |_, cancel| async move {
                cancel.cancelled().await;
            })
            .expect("runtime is available");

        assert!(!handle.is_cancelled());
        drop(store);
        assert!(handle.is_cancelled());
    }
}
