use clap::Parser;
use parks_of_prague::{build_application, cli::Cli, logging};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = Cli::parse().into_config()?;
    logging::init(config.log_level());

    let app = build_application(&config).await?;
    app.run().await?;
    Ok(())
}
