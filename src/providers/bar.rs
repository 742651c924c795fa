use crate::core::{SlowValue, ValueSource};
use std::time::Duration;

/// How long the simulated bar lookup takes.
pub const BAR_DELAY: Duration = Duration::from_secs(5);

pub fn provider() -> SlowValue {
    SlowValue::new("bar", "bar", BAR_DELAY)
}

/// Get the bar value (slow operation).
pub async fn get_bar() -> String {
    provider().fetch().await
}
