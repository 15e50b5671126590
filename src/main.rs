use anyhow::Result;
use antiquity_shop_cli::{
    cli::{Args, CliApp},
    utils::Config,
};
use clap::Parser;

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::from_env()?.with_catalog_path(args.catalog.clone())?;

    let filter = if args.verbose {
        "debug".to_string()
    } else {
        config.log_level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(
        "Configuration loaded for {} environment",
        config.environment
    );

    let mut app = CliApp::new(&config).map_err(|e| {
        tracing::error!("Failed to start shop: {:#}", e);
        e
    })?;
    app.run(args.command)?;

    Ok(())
}
