pub mod client;
pub mod config;
pub mod error;
pub mod history;
pub mod sampling;
pub mod strategy;
