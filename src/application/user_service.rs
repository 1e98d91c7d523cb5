use std::sync::Arc;

use tracing::{debug, info};

use crate::{
    application::dto::{UserEnvelope, UserPageResponse},
    core::{PaginationCursor, Result, UserRecord},
    infrastructure::UserRepository,
};

#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn list_users(&self, page: i64) -> Result<UserPageResponse> {
        let paged = self.repository.list_page(page).await?;
        debug!(
            page = paged.page,
            pages = paged.pages,
            count = paged.items.len(),
            "listed users"
        );
        Ok(UserPageResponse::from(paged))
    }

    pub async fn set_page(&self, page: i64) {
        self.repository.set_page(page).await;
    }

    pub async fn cursor(&self) -> PaginationCursor {
        self.repository.cursor().await
    }

    pub async fn get_user(&self, id: &str) -> Result<UserRecord> {
        self.repository.find_by_id(id).await
    }

    pub async fn delete_user(&self, id: &str) -> Result<()> {
        let removed = self.repository.delete_by_id(id).await;
        if removed == 0 {
            debug!(user_id = %id, "delete of unknown user ignored");
        } else {
            info!(user_id = %id, removed, "user deleted");
        }
        Ok(())
    }

    pub async fn update_user(&self, id: &str, body: &[u8]) -> Result<()> {
        let record = UserEnvelope::from_slice(body)?.into_record()?;
        let new_id = record.id.clone();
        self.repository.upsert_by_id(id, record).await?;
        info!(user_id = %id, new_id = %new_id, "user replaced");
        Ok(())
    }

    pub async fn create_user(&self, body: &[u8]) -> Result<UserRecord> {
        let record = UserEnvelope::from_slice(body)?.into_record()?;
        self.repository.insert_front(record.clone()).await?;
        info!(user_id = %record.id, "user created");
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::{
        core::{StoreError, seed_users},
        infrastructure::in_memory_user_repository::InMemoryUserRepository,
    };

    fn service() -> UserService {
        UserService::new(Arc::new(InMemoryUserRepository::with_records(
            3,
            seed_users(),
        )))
    }

    fn body(id: &str, fname: &str) -> Vec<u8> {
        json!({
            "user": {
                "id": id,
                "email": format!("{}@example.com", fname.to_lowercase()),
                "fname": fname,
                "lname": "Tester",
                "avatar": "https://example.com/a.jpg"
            }
        })
        .to_string()
        .into_bytes()
    }

    #[tokio::test]
    async fn test_create_then_first_on_page_one() {
        let service = service();
        service.create_user(&body("7", "Dana")).await.unwrap();

        let page = service.list_users(1).await.unwrap();
        assert_eq!(page.users[0].id, "7");
        assert_eq!(page.pages, 3);
        assert_eq!(service.get_user("7").await.unwrap().fname, "Dana");
    }

    #[tokio::test]
    async fn test_update_missing_user_is_not_found() {
        let service = service();
        let err = service.update_user("99", &body("99", "Ghost")).await.unwrap_err();
        assert_eq!(err, StoreError::NotFound("99".to_string()));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let service = service();
        service.update_user("2", &body("2", "Janet")).await.unwrap();

        let page = service.list_users(1).await.unwrap();
        assert_eq!(page.users[1].lname, "Tester");
    }

    #[tokio::test]
    async fn test_delete_unknown_user_succeeds() {
        let service = service();
        service.delete_user("99").await.unwrap();
        service.delete_user("1").await.unwrap();
        service.delete_user("1").await.unwrap();
        assert!(service.get_user("1").await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_reported() {
        let service = service();
        let err = service.create_user(b"{}").await.unwrap_err();
        assert!(matches!(err, StoreError::MalformedPayload(_)));
    }
}
