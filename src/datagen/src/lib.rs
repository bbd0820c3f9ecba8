pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod summary;
pub mod transactions;
