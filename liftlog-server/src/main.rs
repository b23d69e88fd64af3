use anyhow::Result;
use clap::Parser;
use dotenvy::dotenv;
use log::info;
use std::net::SocketAddr;

use liftlog_core::db;
use liftlog_core::db::operations::ReorderMode;
use liftlog_server::{routes, state::AppState};

#[derive(Parser, Debug)]
#[command(version, about = "Liftlog - Workout Tracking API", long_about = None)]
struct Args {
    /// Address to bind the HTTP listener to.
    #[arg(long, env = "LIFTLOG_BIND", default_value = "127.0.0.1:3000")]
    bind: SocketAddr,

    /// SQLite database URL.
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "LIFTLOG_POOL_SIZE", default_value_t = 10)]
    pool_size: u32,

    /// Accept reorder requests whose exercise ids do not match the workout's
    /// current exercises (the permissive legacy behavior).
    #[arg(long)]
    lenient_reorder: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let pool = db::init_pool(&args.database_url, args.pool_size)?;
    let mut conn = pool.get()?;
    db::run_migrations(&mut conn)?;
    drop(conn);

    let reorder_mode = if args.lenient_reorder {
        ReorderMode::Lenient
    } else {
        ReorderMode::Strict
    };
    let state = AppState::new(pool, reorder_mode);

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    info!("Listening on {}", args.bind);
    axum::serve(listener, routes::router(state)).await?;
    Ok(())
}
