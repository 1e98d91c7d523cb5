pub mod dto;
pub mod user_service;
