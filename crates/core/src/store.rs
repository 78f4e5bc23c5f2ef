//! Profile resource collaborator.

use crate::profile::ProfileRecord;
use account_common::AppResult;
use tokio::sync::Mutex;

/// Remote profile store trait.
///
/// This is the form's only outward dependency: a GET that yields the current
/// record (or nothing, which is valid and distinct from a transport error)
/// and a PUT that persists a full snapshot. Implementations own transport,
/// authentication, and resource naming.
#[async_trait::async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the current profile record.
    ///
    /// `Ok(None)` means the server has nothing stored yet; errors are
    /// transport or server failures and propagate to the caller unhandled.
    async fn fetch(&self) -> AppResult<Option<ProfileRecord>>;

    /// Persist the full record. The response body, if any, is not consumed.
    async fn save(&self, profile: &ProfileRecord) -> AppResult<()>;
}

/// In-memory profile store.
///
/// Backs the form with process-local state; used as a stand-in where no
/// remote backend is wired up, and throughout the test suite.
#[derive(Default)]
pub struct InMemoryProfileStore {
    record: Mutex<Option<ProfileRecord>>,
}

impl InMemoryProfileStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with a record.
    #[must_use]
    pub fn with_record(record: ProfileRecord) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }
}

#[async_trait::async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn fetch(&self) -> AppResult<Option<ProfileRecord>> {
        Ok(self.record.lock().await.clone())
    }

    async fn save(&self, profile: &ProfileRecord) -> AppResult<()> {
        *self.record.lock().await = Some(profile.clone());
        Ok(())
    }
}
