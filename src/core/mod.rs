pub mod error;
pub mod pagination;
pub mod records;
pub mod user;

pub use error::{Result, StoreError};
pub use pagination::{Page, PaginationCursor, paginate};
pub use records::UserRecords;
pub use user::{UserRecord, seed_users};
