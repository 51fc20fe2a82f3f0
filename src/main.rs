use pubsub_gapic::cli::{commands, output::print_error, Cli};
use pubsub_gapic::config::{ClientConfig, LogFormat, LoggingConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    let logging = match &cli.global.config {
        Some(path) => ClientConfig::from_file(path)?.logging,
        None => LoggingConfig::default(),
    };
    init_tracing(&logging);

    // Execute the command
    if let Err(e) = commands::execute_command(cli.global, cli.command).await {
        print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

// RUST_LOG wins over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pubsub_gapic={}", logging.level)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.compact().init(),
    }
}
