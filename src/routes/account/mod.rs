pub mod activate;
pub mod delete;
pub mod list;
pub mod register;
pub mod retrieve;
pub mod token;
pub mod update;
