//! Background-work hook for running network calls off the host's thread.
//!
//! The host runtime usually has one thread that drives the whole game
//! world. Blocking it on an HTTP round-trip stalls every player. So the
//! client never awaits anything on the caller's behalf. It bundles the
//! call plus the reply delivery into one future and hands that to a
//! [`TaskScheduler`].
//!
//! # Why a trait?
//!
//! Different hosts own different executors. Production wiring uses
//! [`TokioScheduler`]. Tests use a scheduler that queues work and runs it
//! on demand, so assertions never race the network.

use std::future::Future;

use tokio::runtime::Handle;

/// Runs submitted work somewhere other than the caller's thread.
///
/// # Contract
///
/// - `submit` returns immediately, without waiting for `task`.
/// - Submitted tasks are independent. There is no ordering between them
///   and no way to cancel one.
/// - The task already contains its own continuation (replying to the
///   player), so nothing is returned.
pub trait TaskScheduler: Send + Sync + 'static {
    fn submit<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static;
}

/// A [`TaskScheduler`] that spawns onto a Tokio runtime.
///
/// Holding a [`Handle`] instead of relying on the ambient runtime means
/// `submit` works from plain OS threads too, which is where host
/// callbacks usually arrive.
#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Uses the runtime the caller is currently inside, if any.
    pub fn try_current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl From<Handle> for TokioScheduler {
    fn from(handle: Handle) -> Self {
        Self::new(handle)
    }
}

impl TaskScheduler for TokioScheduler {
    fn submit<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        // Detached: the JoinHandle is dropped, the task keeps running.
        drop(self.handle.spawn(task));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::time::Duration;

    use tokio::sync::oneshot;

    #[test]
    fn test_try_current_outside_runtime_is_none() {
        assert!(TokioScheduler::try_current().is_none());
    }

    #[tokio::test]
    async fn test_submit_runs_task() {
        let scheduler = TokioScheduler::try_current().expect("inside a runtime");
        let (tx, rx) = oneshot::channel();

        scheduler.submit(async move {
            let _ = tx.send(42);
        });

        let value = tokio::time::timeout(Duration::from_secs(1), rx)
            .await
            .expect("task should run")
            .expect("sender kept alive");
        assert_eq!(value, 42);
    }

    #[test]
    fn test_submit_from_plain_thread() {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("authlink-worker")
            .enable_all()
            .build()
            .unwrap();
        let scheduler = TokioScheduler::new(runtime.handle().clone());
        let (tx, rx) = std::sync::mpsc::channel();

        let submitter = std::thread::spawn(move || {
            scheduler.submit(async move {
                let current = std::thread::current();
                let _ = tx.send((current.id(), current.name().map(str::to_owned)));
            });
            std::thread::current().id()
        })
        .join()
        .unwrap();

        let (ran_on, name) = rx.recv_timeout(Duration::from_secs(1)).expect("task should run");
        assert_ne!(ran_on, submitter);
        assert_ne!(ran_on, std::thread::current().id());
        assert_eq!(name.as_deref(), Some("authlink-worker"));
    }
}
