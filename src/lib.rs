pub mod command_utils;
pub mod config;
pub mod database;
pub mod error;
pub mod fetch;
pub mod import;
pub mod prompt;
pub mod report;
pub mod site;
pub mod sync;
pub mod terminus;
pub mod validate;
