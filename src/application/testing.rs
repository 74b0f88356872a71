//! In-memory port doubles for use case tests

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::domain::chirp::ChirpSpec;
use crate::domain::notification::{NotificationId, NotificationSummary};
use crate::infrastructure::store::MemoryStore;

use super::ports::{
    ApiError, AudioCue, AudioCueError, Badge, BadgeError, KeyValueStore, NotificationApi,
    ReloadError, Reloader, StoreError, Toast, ToastError, Toaster,
};

/// Ordered log of side effects shared between doubles
#[derive(Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub fn push(&self, entry: impl Into<String>) {
        self.0.lock().unwrap().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.0.lock().unwrap().clear();
    }
}

/// Memory store that journals writes
pub struct JournalingStore {
    inner: MemoryStore,
    journal: Journal,
}

impl JournalingStore {
    pub fn new(journal: Journal) -> Self {
        Self {
            inner: MemoryStore::new(),
            journal,
        }
    }
}

#[async_trait]
impl KeyValueStore for JournalingStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.journal.push(format!("set {}={}", key, value));
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.journal.push(format!("remove {}", key));
        self.inner.remove(key).await
    }
}

/// Canned API responses
#[derive(Default)]
pub struct StubApi {
    unread: Option<Result<NotificationSummary, ApiError>>,
    fail_mark_read: bool,
    marked: Mutex<Vec<NotificationId>>,
}

impl StubApi {
    pub fn ok(summary: NotificationSummary) -> Self {
        Self {
            unread: Some(Ok(summary)),
            ..Default::default()
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            unread: Some(Err(error)),
            ..Default::default()
        }
    }

    pub fn failing_mark_read() -> Self {
        Self {
            fail_mark_read: true,
            ..Default::default()
        }
    }

    pub fn marked(&self) -> Vec<NotificationId> {
        self.marked.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationApi for StubApi {
    async fn fetch_unread(&self) -> Result<NotificationSummary, ApiError> {
        self.unread
            .clone()
            .unwrap_or_else(|| Ok(NotificationSummary::default()))
    }

    async fn mark_read(&self, id: NotificationId) -> Result<(), ApiError> {
        if self.fail_mark_read {
            return Err(ApiError::RequestFailed("connection refused".to_string()));
        }
        self.marked.lock().unwrap().push(id);
        Ok(())
    }
}

/// Badge that remembers its text and visibility
#[derive(Default)]
pub struct RecordingBadge {
    state: Mutex<(Option<String>, bool)>,
    updates: Mutex<usize>,
}

impl RecordingBadge {
    /// `(text, hidden)`
    pub fn state(&self) -> (Option<String>, bool) {
        self.state.lock().unwrap().clone()
    }

    pub fn updates(&self) -> usize {
        *self.updates.lock().unwrap()
    }
}

#[async_trait]
impl Badge for RecordingBadge {
    async fn show(&self, count: u64) -> Result<(), BadgeError> {
        *self.state.lock().unwrap() = (Some(count.to_string()), false);
        *self.updates.lock().unwrap() += 1;
        Ok(())
    }

    async fn hide(&self) -> Result<(), BadgeError> {
        self.state.lock().unwrap().1 = true;
        *self.updates.lock().unwrap() += 1;
        Ok(())
    }
}

/// Reloader that journals each request
pub struct RecordingReloader {
    journal: Journal,
    count: Mutex<usize>,
}

impl RecordingReloader {
    pub fn new(journal: Journal) -> Self {
        Self {
            journal,
            count: Mutex::new(0),
        }
    }

    pub fn count(&self) -> usize {
        *self.count.lock().unwrap()
    }
}

#[async_trait]
impl Reloader for RecordingReloader {
    async fn reload(&self) -> Result<(), ReloadError> {
        self.journal.push("reload");
        *self.count.lock().unwrap() += 1;
        Ok(())
    }
}

/// Audio cue that counts plays
#[derive(Default)]
pub struct RecordingAudio {
    fail: bool,
    plays: Mutex<usize>,
}

impl RecordingAudio {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn plays(&self) -> usize {
        *self.plays.lock().unwrap()
    }
}

#[async_trait]
impl AudioCue for RecordingAudio {
    async fn play(&self, _chirp: &ChirpSpec) -> Result<(), AudioCueError> {
        if self.fail {
            return Err(AudioCueError::DeviceNotAvailable("no device".to_string()));
        }
        *self.plays.lock().unwrap() += 1;
        Ok(())
    }
}

/// Toaster that keeps every toast
#[derive(Default)]
pub struct RecordingToaster {
    toasts: Mutex<Vec<Toast>>,
}

impl RecordingToaster {
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Toaster for RecordingToaster {
    async fn show(&self, toast: &Toast) -> Result<(), ToastError> {
        self.toasts.lock().unwrap().push(toast.clone());
        Ok(())
    }
}
