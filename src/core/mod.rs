pub mod runner;
pub mod source;

pub use crate::utils::error::Result;
pub use runner::Runner;
pub use source::{SlowValue, ValueSource};
