//! gigboard-web - server-rendered booking directory for venues, artists,
//! and shows.

use anyhow::Result;
use clap::Parser;
use gigboard_common::config::{prepare_root_folder, resolve_root_folder};
use gigboard_common::db::init_database;
use gigboard_web::{build_router, AppState};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "gigboard-web", about = "Booking directory web module")]
struct Args {
    /// Root folder holding the database (overrides env and config file)
    #[arg(long)]
    root_folder: Option<String>,

    /// Listen port
    #[arg(long, env = "GIGBOARD_PORT", default_value_t = 5750)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber before anything that can log
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    info!("Starting gigboard-web v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let root_folder = resolve_root_folder(args.root_folder.as_deref(), "GIGBOARD_ROOT")?;
    let db_path = prepare_root_folder(&root_folder)?;
    info!("Database path: {}", db_path.display());

    let pool = init_database(&db_path).await?;
    info!("✓ Database ready");

    let state = AppState::new(pool);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(("127.0.0.1", args.port)).await?;
    info!("gigboard-web listening on http://127.0.0.1:{}", args.port);
    info!("Health check: http://127.0.0.1:{}/health", args.port);

    axum::serve(listener, app).await?;

    Ok(())
}
