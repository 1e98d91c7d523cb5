use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    core::{Page, PaginationCursor, Result, UserRecord, UserRecords},
    infrastructure::UserRepository,
};

#[derive(Debug, Default)]
struct StoreState {
    records: UserRecords,
    cursor: PaginationCursor,
}

/// Process-local user store.
///
/// Records and the pagination cursor sit behind one lock, so a cursor write
/// and the read that follows it are never interleaved with a mutation.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    state: Mutex<StoreState>,
}

impl InMemoryUserRepository {
    pub fn new(rows: i64) -> Self {
        Self::with_records(rows, Vec::new())
    }

    pub fn with_records(rows: i64, records: Vec<UserRecord>) -> Self {
        Self {
            state: Mutex::new(StoreState {
                records: UserRecords::from(records),
                cursor: PaginationCursor::new(rows),
            }),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn list_page(&self, page: i64) -> Result<Page<UserRecord>> {
        let mut state = self.state.lock().await;
        let paged = state.records.page(page, state.cursor.rows)?;
        state.cursor.page = page;
        Ok(paged)
    }

    async fn set_page(&self, page: i64) {
        self.state.lock().await.cursor.page = page;
    }

    async fn cursor(&self) -> PaginationCursor {
        self.state.lock().await.cursor
    }

    async fn find_by_id(&self, id: &str) -> Result<UserRecord> {
        self.state.lock().await.records.find_by_id(id).cloned()
    }

    async fn delete_by_id(&self, id: &str) -> usize {
        self.state.lock().await.records.delete_by_id(id)
    }

    async fn upsert_by_id(&self, id: &str, record: UserRecord) -> Result<()> {
        self.state.lock().await.records.upsert_by_id(id, record)
    }

    async fn insert_front(&self, record: UserRecord) -> Result<()> {
        self.state.lock().await.records.insert_front(record)
    }
}
