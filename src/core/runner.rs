use crate::core::ValueSource;
use crate::utils::error::Result;
use std::io::Write;

pub struct Runner<S: ValueSource> {
    source: S,
}

impl<S: ValueSource> Runner<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetch the value once, print it, and hand it back to the caller.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("fetching {}", self.source.name());
        let value = self.source.fetch().await;

        let mut stdout = std::io::stdout();
        writeln!(stdout, "{}", value)?;

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use tokio_test::assert_ok;

    struct InstantSource;

    #[async_trait]
    impl ValueSource for InstantSource {
        fn name(&self) -> &str {
            "instant"
        }

        async fn fetch(&self) -> String {
            "instant".to_string()
        }
    }

    #[tokio::test]
    async fn run_returns_the_fetched_value() {
        let runner = Runner::new(InstantSource);
        let value = assert_ok!(runner.run().await);
        assert_eq!(value, "instant");
    }

    #[tokio::test]
    async fn run_is_repeatable() {
        let runner = Runner::new(InstantSource);
        let first = assert_ok!(runner.run().await);
        let second = assert_ok!(runner.run().await);
        assert_eq!(first, second);
    }
}
