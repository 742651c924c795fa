use clap::Parser;
use slowval::providers::foo;
use slowval::utils::logger;
use slowval::{CliConfig, Runner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting foo runner");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let mut source = foo::provider();
    if let Some(delay) = config.delay_override() {
        source = source.with_delay(delay);
    }

    let runner = Runner::new(source);
    let value = runner.run().await?;
    tracing::debug!("runner produced {:?}", value);

    Ok(())
}
