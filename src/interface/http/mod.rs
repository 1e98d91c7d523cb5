pub mod problem;
pub mod users_handler;
pub mod views;
