//! In-memory record store for development and tests

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use kernel::id::{RecordId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::ArmstrongRecord;
use crate::domain::repository::ArmstrongRepository;
use crate::error::{ArmstrongError, ArmstrongResult};

#[derive(Default)]
struct Store {
    last_id: i64,
    rows: Vec<ArmstrongRecord>,
}

#[derive(Clone, Default)]
pub struct InMemoryArmstrongRepository {
    store: Arc<RwLock<Store>>,
    failing: Arc<AtomicBool>,
}

impl InMemoryArmstrongRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent operation fail as an unavailable store would
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check_available(&self) -> ArmstrongResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(ArmstrongError::Internal("record store unavailable".into()));
        }
        Ok(())
    }
}

impl ArmstrongRepository for InMemoryArmstrongRepository {
    async fn insert(&self, user_id: UserId, number: i64) -> ArmstrongResult<ArmstrongRecord> {
        self.check_available()?;
        let mut store = self.store.write().await;

        store.last_id += 1;
        let record = ArmstrongRecord {
            id: RecordId::new(store.last_id),
            user_id,
            number,
            created_at: Utc::now(),
        };
        store.rows.push(record.clone());

        Ok(record)
    }

    async fn list_for_user(&self, user_id: UserId) -> ArmstrongResult<Vec<ArmstrongRecord>> {
        self.check_available()?;
        let store = self.store.read().await;

        let mut records: Vec<ArmstrongRecord> = store
            .rows
            .iter()
            .filter(|r| r.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(records)
    }
}
