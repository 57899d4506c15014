use std::net::SocketAddr;

use clap::Parser;
use sv_table::SaturationTable;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sv-server")]
#[command(about = "Saturation-volume lookup service for phase-change diagrams", long_about = None)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "SV_BIND", default_value = "0.0.0.0:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let table = SaturationTable::reference_water();
    tracing::info!(
        bind = %args.bind,
        points = table.points().len(),
        min_mpa = table.min_pressure(),
        critical_mpa = table.critical_pressure(),
        "starting saturation lookup service"
    );

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    axum::serve(listener, sv_server::router(table)).await
}
