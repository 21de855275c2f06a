pub mod app;
pub mod cli;
pub mod config;
pub mod errors;
pub mod logger;

pub use app::{execute, run};
pub use errors::{BotError, Result, exit_code};

#[cfg(test)]
mod app_test;
