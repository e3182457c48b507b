use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tracing::{error, info};
use zone_finder_domain::CliOverrides;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "zone-finder")]
#[command(version)]
#[command(about = "Zone Finder - resolve hostnames to availability zones")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port
    #[arg(short = 'p', long, env = "PORT")]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    log_level: Option<String>,

    /// Resolution cache TTL in seconds
    #[arg(long, env = "DNS_CACHE_TTL")]
    cache_ttl: Option<u64>,

    /// Maximum number of cached resolutions
    #[arg(long, env = "DNS_CACHE_MAXSIZE")]
    cache_maxsize: Option<usize>,

    /// JSON file with the subnet to zone table
    #[arg(long, env = "SUBNETS_FILE", value_name = "FILE")]
    subnets_file: Option<String>,
}

impl From<&Cli> for CliOverrides {
    fn from(cli: &Cli) -> Self {
        Self {
            port: cli.port,
            bind_address: cli.bind.clone(),
            log_level: cli.log_level.clone(),
            cache_ttl_secs: cli.cache_ttl,
            cache_max_entries: cli.cache_maxsize,
            subnets_file: cli.subnets_file.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = bootstrap::load_config(cli.config.as_deref(), CliOverrides::from(&cli))?;

    bootstrap::init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config_file = cli.config.as_deref().unwrap_or("default"),
        port = config.server.port,
        bind = %config.server.bind_address,
        cache_ttl_secs = config.cache.ttl_secs,
        cache_max_entries = config.cache.max_entries,
        subnets_file = %config.subnets.file,
        "Starting Zone Finder"
    );

    let services = di::LookupServices::new(&config).inspect_err(|e| {
        error!(error = %e, "Failed to initialize lookup services");
    })?;
    let use_cases = di::UseCases::new(&services, &config);
    let app_state = use_cases.into_app_state(&services);

    let bind_ip: IpAddr = config
        .server
        .bind_address
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.server.bind_address))?;
    let web_addr = SocketAddr::new(bind_ip, config.server.port);

    server::start_web_server(web_addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
