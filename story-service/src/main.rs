use service_core::observability::init_tracing;
use story_service::config::StoryConfig;
use story_service::startup::Application;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = StoryConfig::load().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing(
        "story-service",
        &config.common.log_level,
        config.common.otlp_endpoint.as_deref(),
    );

    let app = Application::build(config).await?;
    app.run_until_stopped().await?;

    Ok(())
}
