use async_trait::async_trait;
use std::time::Duration;
use tokio::time;

#[async_trait]
pub trait ValueSource: Send + Sync {
    fn name(&self) -> &str;
    async fn fetch(&self) -> String;
}

/// Simulates a slow lookup: waits out a fixed delay, then yields a constant value.
#[derive(Debug, Clone)]
pub struct SlowValue {
    name: &'static str,
    value: &'static str,
    delay: Duration,
}

impl SlowValue {
    pub fn new(name: &'static str, value: &'static str, delay: Duration) -> Self {
        Self { name, value, delay }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ValueSource for SlowValue {
    fn name(&self) -> &str {
        self.name
    }

    async fn fetch(&self) -> String {
        tracing::debug!("simulating slow lookup for {} ({:?})", self.name, self.delay);
        time::sleep(self.delay).await;
        self.value.to_string()
    }
}
