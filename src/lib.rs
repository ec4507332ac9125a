pub mod config;
pub mod db;
pub mod notify;
pub mod ownership;
pub mod policy;
pub mod routes;
pub mod types;
pub mod utils;
pub mod validation;
