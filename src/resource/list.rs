//! Observable in-memory mirror of one remote collection

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use crate::api::CollectionApi;
use crate::error::Result;
use crate::models::{Record, RecordId};

/// Handle returned by [`ListResource::subscribe`], used to unsubscribe.
pub type ListenerId = u64;

type Listener<T> = Box<dyn Fn(&[T]) + Send + Sync>;

/// Lifecycle of a resource's cached sequence.
///
/// There is no terminal error state: a failed operation settles back to the
/// previous populated state with stale-but-valid data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// Never successfully loaded.
    Empty,
    /// A read or mutation is in flight.
    Loading,
    /// Holds the result of the last successful read.
    Loaded,
}

struct Inner<T> {
    items: Vec<T>,
    state: ResourceState,
    /// Sequence token of the last applied read.
    applied_seq: u64,
    loaded_once: bool,
}

struct ListenerSet<T> {
    next_id: ListenerId,
    entries: Vec<(ListenerId, Listener<T>)>,
}

/// Reactive cache of one entity collection, backed by a remote CRUD API.
///
/// The sequence is only ever replaced wholesale with a server read, in
/// server order. Mutations re-fetch after success instead of patching
/// locally, so a failed request always leaves the cache untouched.
///
/// Reads carry a monotonically increasing sequence token; when two reads
/// race, only the latest-issued one is applied and older completions are
/// discarded.
pub struct ListResource<T: Record> {
    api: Arc<dyn CollectionApi<T>>,
    inner: Arc<RwLock<Inner<T>>>,
    listeners: Arc<Mutex<ListenerSet<T>>>,
    seq: Arc<AtomicU64>,
}

impl<T: Record> Clone for ListResource<T> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            inner: Arc::clone(&self.inner),
            listeners: Arc::clone(&self.listeners),
            seq: Arc::clone(&self.seq),
        }
    }
}

impl<T: Record> ListResource<T> {
    /// Create an empty resource over the given collection API.
    pub fn new(api: Arc<dyn CollectionApi<T>>) -> Self {
        Self {
            api,
            inner: Arc::new(RwLock::new(Inner {
                items: Vec::new(),
                state: ResourceState::Empty,
                applied_seq: 0,
                loaded_once: false,
            })),
            listeners: Arc::new(Mutex::new(ListenerSet {
                next_id: 1,
                entries: Vec::new(),
            })),
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the cached sequence, in server order.
    pub fn items(&self) -> Vec<T> {
        self.inner
            .read()
            .map(|inner| inner.items.clone())
            .unwrap_or_default()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ResourceState {
        self.inner
            .read()
            .map(|inner| inner.state)
            .unwrap_or(ResourceState::Empty)
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|inner| inner.items.len())
            .unwrap_or_default()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find a cached record by server id.
    pub fn find(&self, id: RecordId) -> Option<T> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.items.iter().find(|item| item.id() == Some(id)).cloned())
    }

    /// Whether a record with the given id is currently cached.
    pub fn contains(&self, id: RecordId) -> bool {
        self.find(id).is_some()
    }

    /// Register a listener invoked synchronously after every applied change,
    /// with a snapshot of the new sequence.
    ///
    /// Listeners must not subscribe or unsubscribe from inside the callback.
    pub fn subscribe(&self, listener: impl Fn(&[T]) + Send + Sync + 'static) -> ListenerId {
        let mut set = match self.listeners.lock() {
            Ok(set) => set,
            Err(poisoned) => poisoned.into_inner(),
        };
        let id = set.next_id;
        set.next_id += 1;
        set.entries.push((id, Box::new(listener)));
        id
    }

    /// Remove a previously registered listener. Returns whether it existed.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut set = match self.listeners.lock() {
            Ok(set) => set,
            Err(poisoned) => poisoned.into_inner(),
        };
        let before = set.entries.len();
        set.entries.retain(|(entry_id, _)| *entry_id != id);
        set.entries.len() != before
    }

    /// Re-read the full collection from the server.
    ///
    /// A single attempt: on success the whole cached sequence is replaced
    /// with the server's order; on failure the cache is left untouched and
    /// the error is logged and returned.
    pub async fn refresh(&self) -> Result<()> {
        let token = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        self.set_loading();

        match self.api.list().await {
            Ok(items) => {
                self.apply(token, items);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    "{} refresh failed, keeping cached sequence: {}",
                    T::COLLECTION,
                    err
                );
                self.settle();
                Err(err)
            }
        }
    }

    /// Create a record, then re-read the collection to reconcile the
    /// server-assigned id and any server-side defaulting.
    ///
    /// On failure the cache is unchanged and no entity is inserted locally.
    pub async fn create(&self, draft: &T::Draft) -> Result<T> {
        self.set_loading();

        match self.api.create(draft).await {
            Ok(created) => {
                tracing::info!(
                    "{} {:?} created with id {:?}",
                    T::COLLECTION,
                    created.label(),
                    created.id()
                );
                if let Err(err) = self.refresh().await {
                    tracing::warn!("post-create {} refresh failed: {}", T::COLLECTION, err);
                }
                Ok(created)
            }
            Err(err) => {
                tracing::warn!("{} create failed, local state unchanged: {}", T::COLLECTION, err);
                self.settle();
                Err(err)
            }
        }
    }

    /// Update a record, then re-read the collection.
    pub async fn update(&self, id: RecordId, draft: &T::Draft) -> Result<T> {
        self.set_loading();

        match self.api.update(id, draft).await {
            Ok(updated) => {
                tracing::info!("{} {} updated", T::COLLECTION, id);
                if let Err(err) = self.refresh().await {
                    tracing::warn!("post-update {} refresh failed: {}", T::COLLECTION, err);
                }
                Ok(updated)
            }
            Err(err) => {
                tracing::warn!(
                    "{} update for id {} failed, local state unchanged: {}",
                    T::COLLECTION,
                    id,
                    err
                );
                self.settle();
                Err(err)
            }
        }
    }

    /// Delete a record, then re-read the collection.
    ///
    /// The record is not removed locally before the server confirms.
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        self.set_loading();

        match self.api.delete(id).await {
            Ok(()) => {
                tracing::info!("{} {} deleted", T::COLLECTION, id);
                if let Err(err) = self.refresh().await {
                    tracing::warn!("post-delete {} refresh failed: {}", T::COLLECTION, err);
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(
                    "{} delete for id {} failed, record kept locally: {}",
                    T::COLLECTION,
                    id,
                    err
                );
                self.settle();
                Err(err)
            }
        }
    }

    /// Read a single record by id, bypassing the cache.
    pub async fn fetch(&self, id: RecordId) -> Result<T> {
        self.api.get(id).await
    }

    fn set_loading(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.state = ResourceState::Loading;
        }
    }

    /// Settle back to the previous populated state after a failed or
    /// discarded operation.
    fn settle(&self) {
        if let Ok(mut inner) = self.inner.write() {
            inner.state = if inner.loaded_once {
                ResourceState::Loaded
            } else {
                ResourceState::Empty
            };
        }
    }

    /// Apply a completed read if no newer read has been applied already.
    fn apply(&self, token: u64, items: Vec<T>) {
        let snapshot = {
            let mut inner = match self.inner.write() {
                Ok(inner) => inner,
                Err(_) => return,
            };
            if token <= inner.applied_seq {
                tracing::debug!(
                    "discarding stale {} read (token {} <= {})",
                    T::COLLECTION,
                    token,
                    inner.applied_seq
                );
                drop(inner);
                self.settle();
                return;
            }
            inner.items = items;
            inner.applied_seq = token;
            inner.loaded_once = true;
            inner.state = ResourceState::Loaded;
            inner.items.clone()
        };
        self.notify(&snapshot);
    }

    /// Invoke listeners outside the state lock so they can read the
    /// resource freely.
    fn notify(&self, snapshot: &[T]) {
        let set = match self.listeners.lock() {
            Ok(set) => set,
            Err(poisoned) => poisoned.into_inner(),
        };
        for (_, listener) in set.entries.iter() {
            listener(snapshot);
        }
    }
}
