use std::collections::HashMap;
use std::hash::Hash;

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

struct TaskEntry {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

/// Running tasks keyed by id. Every token is a child of one root, so
/// [`TaskRegistry::shutdown`] stops all of them.
pub(crate) struct TaskRegistry<K> {
    root: CancellationToken,
    tasks: HashMap<K, TaskEntry>,
}

impl<K: Eq + Hash + Copy> TaskRegistry<K> {
    pub(crate) fn new(root: CancellationToken) -> Self {
        Self {
            root,
            tasks: HashMap::new(),
        }
    }

    /// Token for a task about to be spawned under `key`.
    pub(crate) fn child_token(&self) -> CancellationToken {
        self.root.child_token()
    }

    /// Registers a spawned task, cancelling any task previously held under `key`.
    pub(crate) fn insert(&mut self, key: K, cancel: CancellationToken, handle: JoinHandle<()>) {
        self.prune();
        if let Some(previous) = self.tasks.insert(key, TaskEntry { cancel, handle }) {
            previous.cancel.cancel();
        }
    }

    /// Cancels and forgets the task under `key`. Returns whether it was still running.
    pub(crate) fn cancel(&mut self, key: K) -> bool {
        match self.tasks.remove(&key) {
            Some(entry) => {
                let running = !entry.handle.is_finished();
                entry.cancel.cancel();
                running
            }
            None => false,
        }
    }

    pub(crate) fn active(&mut self) -> usize {
        self.prune();
        self.tasks.len()
    }

    fn prune(&mut self) {
        self.tasks.retain(|_, entry| !entry.handle.is_finished());
    }

    pub(crate) fn shutdown(&mut self) {
        self.root.cancel();
        self.tasks.clear();
    }
}
