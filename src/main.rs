use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use employee_payroll::api::{AppState, create_router};
use employee_payroll::config::ConfigLoader;
use employee_payroll::store::{EmployeeStore, open_repository};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Service configuration YAML file. Built-in defaults are used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Address to listen on, overriding `server.bind_addr`.
    #[arg(long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    let cli = Cli::parse();

    let mut loader = match &cli.config {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::default(),
    };
    if let Some(bind) = cli.bind {
        loader = loader.with_bind_addr(bind);
    }

    // RUST_LOG wins over the configured filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&loader.logging().filter)),
        )
        .init();

    let repository = open_repository(loader.storage()).await?;
    let state = AppState::new(EmployeeStore::new(repository));
    let app = create_router(state);

    let bind_addr = &loader.server().bind_addr;
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("Employee payroll service listening on {bind_addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
