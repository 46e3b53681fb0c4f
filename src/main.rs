use clap::Parser;
use greeting_service::AppConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "greeting-service")]
#[command(about = "Greeting microservice with liveness and stop endpoints")]
#[command(version)]
struct Cli {
    #[arg(long, help = "Interface to bind (overrides HTTP_HOST)")]
    host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides HTTP_PORT / PORT)")]
    port: Option<u16>,

    #[arg(long, help = "Milliseconds between /api/stop and listener close")]
    shutdown_grace_ms: Option<u64>,

    #[arg(short, long, help = "Enable debug logging for this service")]
    verbose: bool,
}

impl Cli {
    fn apply(&self, mut config: AppConfig) -> AppConfig {
        if let Some(host) = &self.host {
            config.http.host = host.clone();
        }
        if let Some(port) = self.port {
            config.http.port = port;
        }
        if let Some(grace) = self.shutdown_grace_ms {
            config.http.shutdown_grace_ms = grace;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up HTTP_PORT, APP_ENV, etc.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("greeting_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let config = cli.apply(AppConfig::from_env()?);
    tracing::info!(
        "Starting greeting service in {:?} mode on {}",
        config.environment,
        config.bind_addr()
    );

    greeting_service::run(config).await?;
    Ok(())
}
