use std::time::Duration;

use actix_web::{App, HttpServer, middleware, web};
use clap::Parser;
use dotenvy::dotenv;

use product_service::config::ServerConfig;
use product_service::healthcheck;
use product_service::repository::InMemoryRepository;
use product_service::routes;

/// Seconds granted to in-flight requests after a termination signal.
const SHUTDOWN_TIMEOUT_SECS: u64 = 15;

#[derive(Parser)]
#[command(name = "product-service")]
#[command(about = "In-memory product catalogue served over HTTP")]
struct Cli {
    /// Probe the local liveness endpoint and exit
    #[arg(long)]
    healthcheck: bool,
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let config = ServerConfig::from_env();

    if cli.healthcheck {
        let url = config.health_url();
        match healthcheck::probe(&url).await {
            Ok(()) => {
                log::info!("health check passed");
                return Ok(());
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    }

    let repo = InMemoryRepository::new();

    log::info!(
        "Product service listening on {}:{}",
        config.address,
        config.port
    );

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .client_request_timeout(Duration::from_secs(5))
    .keep_alive(Duration::from_secs(120))
    .shutdown_timeout(SHUTDOWN_TIMEOUT_SECS)
    .bind((config.address.as_str(), config.port))?
    .run()
    .await?;

    log::info!("server stopped");
    Ok(())
}
