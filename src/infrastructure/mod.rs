use async_trait::async_trait;

use crate::core::{Page, PaginationCursor, Result, UserRecord};

pub mod in_memory_user_repository;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Returns `page` and moves the shared cursor there. A rejected page
    /// leaves the cursor where it was.
    async fn list_page(&self, page: i64) -> Result<Page<UserRecord>>;
    async fn set_page(&self, page: i64);
    async fn cursor(&self) -> PaginationCursor;
    async fn find_by_id(&self, id: &str) -> Result<UserRecord>;
    async fn delete_by_id(&self, id: &str) -> usize;
    async fn upsert_by_id(&self, id: &str, record: UserRecord) -> Result<()>;
    async fn insert_front(&self, record: UserRecord) -> Result<()>;
}
