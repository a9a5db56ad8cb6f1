use anyhow::Context;
use mailweave::configuration::get_config;
use mailweave::startup::Application;
use mailweave::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("mailweave".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_config().context("Failed to read configuration")?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await?;
    Ok(())
}
