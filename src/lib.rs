//! Server-rendered user directory over a paginated in-memory store.

pub mod app;
pub mod application;
pub mod config;
pub mod core;
pub mod infrastructure;
pub mod interface;
pub mod state;

pub use crate::app::build_router;
pub use crate::config::AppConfig;
pub use crate::core::{Page, PaginationCursor, StoreError, UserRecord, UserRecords, paginate};
pub use crate::state::AppState;
