pub mod account;
pub mod error;
pub mod mail;
pub mod module;
pub mod response;
pub mod token;
