//! Event fan-out from the provider wrapper, and the user-facing notification
//! seam used by the orchestrator.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::sync::{Arc, Mutex, MutexGuard};

type Senders<E> = Arc<Mutex<Vec<(u64, Sender<E>)>>>;

/// Broadcasts events to every live subscription.
pub struct Notifier<E: Clone + Send + 'static> {
    senders: Senders<E>,
    next_id: Arc<Mutex<u64>>,
}

impl<E: Clone + Send + 'static> Clone for Notifier<E> {
    fn clone(&self) -> Self {
        Self {
            senders: Arc::clone(&self.senders),
            next_id: Arc::clone(&self.next_id),
        }
    }
}

impl<E: Clone + Send + 'static> Default for Notifier<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone + Send + 'static> Notifier<E> {
    pub fn new() -> Self {
        Self {
            senders: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(0)),
        }
    }

    pub fn notify(&self, event: E) {
        let mut senders = lock(&self.senders);
        senders.retain(|(_, tx)| tx.send(event.clone()).is_ok());
    }

    pub fn subscribe(&self) -> Subscription<E> {
        let id = {
            let mut next = lock(&self.next_id);
            *next += 1;
            *next
        };
        let (tx, rx) = mpsc::channel();
        lock(&self.senders).push((id, tx));
        Subscription {
            id,
            rx,
            senders: Arc::clone(&self.senders),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.senders).len()
    }
}

/// Receiving end of a `Notifier`. Dropping it unregisters immediately.
pub struct Subscription<E> {
    id: u64,
    rx: Receiver<E>,
    senders: Senders<E>,
}

impl<E> Subscription<E> {
    /// Everything delivered since the last call, without blocking.
    pub fn drain(&self) -> Vec<E> {
        let mut out = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => out.push(event),
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        lock(&self.senders).retain(|(id, _)| *id != self.id);
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// What kind of long-running operation a notification is about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperationKind {
    RefreshChangesets,
    FetchChangesetFiles,
    Switch,
}

/// User-facing notifications (toasts, message log). Implemented by the host.
pub trait NotificationSink {
    /// A mutating operation was accepted; show an ongoing notification.
    fn in_progress(&mut self, label: &str);
    /// The ongoing notification, if any, should go away.
    fn clear_in_progress(&mut self);
    fn success(&mut self, kind: OperationKind, message: &str);
    fn failure(&mut self, kind: OperationKind, message: &str);
    fn warning(&mut self, message: &str);
}

/// Sends every notification to the `log` facade.
#[derive(Clone, Debug, Default)]
pub struct LogNotifications;

impl NotificationSink for LogNotifications {
    fn in_progress(&mut self, label: &str) {
        log::info!("{}", label);
    }

    fn clear_in_progress(&mut self) {}

    fn success(&mut self, kind: OperationKind, message: &str) {
        log::info!("{:?} succeeded: {}", kind, message);
    }

    fn failure(&mut self, kind: OperationKind, message: &str) {
        log::warn!("{:?} failed: {}", kind, message);
    }

    fn warning(&mut self, message: &str) {
        log::warn!("{}", message);
    }
}

#[cfg(test)]
#[path = "tests/notify_tests.rs"]
mod tests;
