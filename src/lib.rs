pub mod config;
pub mod core;
pub mod providers;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{
    runner::Runner,
    source::{SlowValue, ValueSource},
};
pub use crate::utils::error::{Result, RunnerError};
