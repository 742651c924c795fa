use crate::core::{SlowValue, ValueSource};
use std::time::Duration;

/// How long the simulated foo lookup takes.
pub const FOO_DELAY: Duration = Duration::from_secs(10);

pub fn provider() -> SlowValue {
    SlowValue::new("foo", "foo", FOO_DELAY)
}

/// Get the foo value (slow operation).
pub async fn get_foo() -> String {
    provider().fetch().await
}
