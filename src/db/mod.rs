pub mod account;
pub mod module;
pub mod postgres_service;
